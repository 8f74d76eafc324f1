// src/progress.rs
/// Progress reporting for multi-season runs.
/// The CLI implements this to print one line per season.
pub trait Progress {
    /// Called at the start with the number of seasons.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one season has been loaded and classified.
    fn item_done(&mut self, _season: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Collects everything it is told. Handy in tests.
#[derive(Default, Debug)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub done: Vec<u32>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn item_done(&mut self, season: u32) { self.done.push(season); }
    fn finish(&mut self) { self.finished = true; }
}
