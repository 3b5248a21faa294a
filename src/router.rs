// ============================================================================
// ROUTER - Path -> view resolution and link targets
// ============================================================================
// Patterns are tried in order and the first hit wins. Matching is by
// leading segments, case-insensitive, and ignores empty segments, so
// "/anecdotes/", "/Anecdotes" and "/anecdotes/3/extra" all resolve.
// ============================================================================

use yew_router::prelude::*;

/// Link and redirect targets
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/anecdotes/:id")]
    Anecdote { id: String },
    #[at("/anecdotes")]
    Anecdotes,
    #[at("/about")]
    About,
    #[at("/create")]
    Create,
}

/// What the shell renders for a path
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum View {
    List,
    Detail { id: String },
    About,
    Create,
}

#[derive(Clone, Copy)]
enum Pattern {
    Literal(&'static str),
    Param,
}

struct RoutePattern {
    segments: &'static [Pattern],
    build: fn(Option<&str>) -> View,
}

fn detail_view(id: Option<&str>) -> View {
    View::Detail {
        id: id.unwrap_or_default().to_string(),
    }
}

fn list_view(_: Option<&str>) -> View {
    View::List
}

fn about_view(_: Option<&str>) -> View {
    View::About
}

fn create_view(_: Option<&str>) -> View {
    View::Create
}

const ROUTES: &[RoutePattern] = &[
    RoutePattern {
        segments: &[Pattern::Literal("anecdotes"), Pattern::Param],
        build: detail_view,
    },
    RoutePattern {
        segments: &[Pattern::Literal("anecdotes")],
        build: list_view,
    },
    RoutePattern {
        segments: &[Pattern::Literal("about")],
        build: about_view,
    },
    RoutePattern {
        segments: &[Pattern::Literal("create")],
        build: create_view,
    },
    // "/" matches every path
    RoutePattern {
        segments: &[],
        build: list_view,
    },
];

impl RoutePattern {
    fn matches<'a>(&self, path: &[&'a str]) -> Option<Option<&'a str>> {
        if path.len() < self.segments.len() {
            return None;
        }

        let mut param = None;
        for (pattern, segment) in self.segments.iter().zip(path) {
            match pattern {
                Pattern::Literal(literal) if literal.eq_ignore_ascii_case(segment) => {}
                Pattern::Literal(_) => return None,
                Pattern::Param => param = Some(*segment),
            }
        }
        Some(param)
    }
}

/// Resolves a location path (no query or fragment) to a view
pub fn resolve(path: &str) -> View {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    ROUTES
        .iter()
        .find_map(|route| route.matches(&segments).map(route.build))
        .unwrap_or(View::List)
}

/// Where the app goes once an anecdote has been created
pub fn after_create() -> Route {
    Route::Anecdotes
}
