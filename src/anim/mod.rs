/// Animation primitives for the portfolio
///
/// - Easing curves (easing.rs)
/// - Staged timelines: crossfade, preloader (timeline.rs)
/// - Scroll-triggered reveal bindings (reveal.rs)
///
/// Everything here is sampled against a clock the caller passes in; the
/// frame loop lives in the application shell, not in this module.

pub mod easing;
pub mod reveal;
pub mod timeline;
