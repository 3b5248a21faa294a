use yew::prelude::*;
use yew_router::history::{AnyHistory, History};
use yew_router::prelude::*;

use crate::router::{self, Route};

/// Anything a route can be pushed onto
pub trait RouteSink {
    fn push_route(&self, route: &Route);
}

impl RouteSink for Navigator {
    fn push_route(&self, route: &Route) {
        self.push(route);
    }
}

impl RouteSink for AnyHistory {
    fn push_route(&self, route: &Route) {
        self.push(route.to_path());
    }
}

/// Sends `sink` to the view shown after a successful creation
pub fn redirect_after_create(sink: &impl RouteSink) -> Route {
    let target = router::after_create();
    log::debug!("➡️ Redirecting to {}", target.to_path());
    sink.push_route(&target);
    target
}

/// Programmatic transitions triggered by actions rather than links
#[derive(Clone)]
pub struct NavigationController {
    navigator: Option<Navigator>,
}

impl NavigationController {
    pub fn after_create(&self) {
        match &self.navigator {
            Some(navigator) => {
                redirect_after_create(navigator);
            }
            None => log::warn!("⚠️ No router available, staying on the current view"),
        }
    }
}

#[hook]
pub fn use_navigation() -> NavigationController {
    NavigationController {
        navigator: use_navigator(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{resolve, View};
    use yew_router::history::MemoryHistory;

    #[test]
    fn create_redirect_lands_on_the_list() {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push("/create");
        assert_eq!(resolve(history.location().path()), View::Create);

        let target = redirect_after_create(&history);

        assert_eq!(target, Route::Anecdotes);
        assert_eq!(history.location().path(), "/anecdotes");
        assert_eq!(resolve(history.location().path()), View::List);
    }

    #[test]
    fn controller_without_router_stays_put() {
        let controller = NavigationController { navigator: None };
        controller.after_create();
    }
}
