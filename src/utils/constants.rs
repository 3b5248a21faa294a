/// How long a "new anecdote" notification stays up
pub const NOTIFICATION_TIMEOUT_MS: u32 = 10_000;

pub const COURSE_URL: &str = "https://courses.helsinki.fi/fi/tkt21009";
pub const SOURCE_URL: &str =
    "https://github.com/fullstack-hy/routed-anecdotes/blob/master/src/App.js";
pub const SOURCE_LABEL: &str =
    "https://github.com/fullstack-hy2019/routed-anecdotes/blob/master/src/App.js";
