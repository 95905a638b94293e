//! Python bindings for the briefcase game engine.
//!
//! # Quick Start
//!
//! ```python
//! import briefcase_game as bg
//!
//! session = bg.BriefcaseSession(seed=42, player_name="Ana")
//! session.initialize()
//! session.select_container(5)
//! print(session.message())   # "Open 6 more cases"
//!
//! for event, cue in session.drain_events():
//!     print(event, cue)
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// briefcase_game: the briefcase elimination game engine.
#[pymodule]
fn briefcase_game(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBriefcaseSession>()?;
    m.add_class::<PyLeaderboard>()?;
    Ok(())
}
