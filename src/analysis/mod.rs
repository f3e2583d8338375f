// Price change and cross-market heuristics
pub mod change;
pub mod market_signals;

pub use change::{PriceChange, compute_change};
pub use market_signals::{ChangeSnapshot, MarketSignal, SIGNAL_TICKERS, analyze_market};
