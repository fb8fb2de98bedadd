/// Number of values the demo generates.
pub const SEQUENCE_LEN: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub len: usize,
    /// Prefix the two printed lines with `before: ` and `after: `.
    pub labels: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            len: SEQUENCE_LEN,
            labels: false,
        }
    }
}
