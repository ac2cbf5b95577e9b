//! Python bindings for the word-rush round engine.
//!
//! # Quick Start
//!
//! ```python
//! import word_rush
//!
//! words = word_rush.RoundEngine.parse_words("cat, dog, bird, fish")
//! game = word_rush.RoundEngine(words, total_time_limit_secs=120, seed=42)
//!
//! game.poll()
//! game.mark_correct()
//! print(game.score, game.drain_sounds(), game.drain_messages())
//! ```

use pyo3::prelude::*;

mod py_round;

pub use py_round::*;

/// word_rush: round engine for a timed word-guessing party game.
#[pymodule]
fn word_rush(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRoundEngine>()?;
    m.add_function(wrap_pyfunction!(finalize_score, m)?)?;
    Ok(())
}
