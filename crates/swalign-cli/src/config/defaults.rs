pub struct DefaultsConfig {
    pub match_score: f64,
    pub mismatch_penalty: f64,
    pub gap_penalty: f64,
    pub gap_start_penalty: f64,
    pub max_alignments: Option<usize>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            match_score: 1.0,
            mismatch_penalty: -1.0,
            gap_penalty: -1.0,
            gap_start_penalty: 0.0,
            max_alignments: None,
        }
    }
}
