//! The three timed/derived engines behind the component: placeholder
//! rotation, suggestion filtering, and the dissolve wipe.

pub mod dissolve;
pub mod rotator;
pub mod suggest;

pub use dissolve::{DissolveAnimator, Frame, MIN_RADIUS_DECAY, RADIUS_DECAY, WIPE_STEP};
pub use rotator::{PlaceholderRotator, ROTATE_INTERVAL};
pub use suggest::{MAX_SUGGESTIONS, SuggestionEngine, filter_catalog};
