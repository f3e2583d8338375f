// Domain types and value objects
pub mod category;
pub mod price_series;
pub mod symbol;

// Re-export commonly used types
pub use category::{CATEGORIES, Category, CategoryDescriptor, PanelSpec};
pub use price_series::{PriceObservation, PriceSeries};
pub use symbol::Symbol;
