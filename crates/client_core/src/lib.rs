pub mod catalog_filter;
pub mod clock;
pub mod countdown;
pub mod drag_scroll;
pub mod error;
pub mod haptics;
pub mod ticket_pricing;
pub mod toggle_store;

pub use catalog_filter::{filter_entries, CatalogView};
pub use clock::{Clock, FixedClock, SystemClock};
pub use countdown::{time_remaining, CountdownTicker, TimeRemaining, DEFAULT_TICK_INTERVAL};
pub use drag_scroll::{
    BoundedSurface, CursorAffordance, DragScrollController, DragState, PointerButton,
    PointerEvent, ScrollSession, ScrollSurface, DRAG_SPEED_MULTIPLIER,
};
pub use error::CoreError;
pub use haptics::{HapticFeedback, HapticPulse, NoHaptics, RecordingHaptics, TracingHaptics};
pub use ticket_pricing::{
    line_total, PurchaseSelection, TicketPricingEngine, MAX_QUANTITY, MIN_QUANTITY,
};
pub use toggle_store::{ToggleState, ToggleStore, VoteOutcome};
