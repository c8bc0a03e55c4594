#[derive(Default, Debug, Clone)]
pub struct SearchConfig {
    pub max_results: Option<usize>,
    pub parallel: bool,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }
}
