use std::collections::HashMap;

use crate::analysis::change::compute_change;
use crate::data::FetchOutcome;
use crate::domain::Symbol;

/// Tickers the heuristics read.
pub const SIGNAL_TICKERS: [&str; 8] = [
    "ES=F", "NQ=F", "RTY=F", "ZN=F", "VX=F", "CL=F", "GC=F", "DX-Y.NYB",
];

/// Threshold (in %) under which ES counts as flat for the rotation rule.
const FLAT_ES_PCT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum MarketSignal {
    #[strum(
        serialize = "Bullish: S&P 500 and Nasdaq rising with falling 10-Year Treasury yields indicate strong market sentiment."
    )]
    Bullish,
    #[strum(
        serialize = "Bearish: Declines across equity futures combined with rising volatility or safe-haven assets suggest a risk-off environment."
    )]
    Bearish,
    #[strum(
        serialize = "Defensive Rotation: Stable S&P 500 but weakness in Nasdaq and Russell 2000 implies investors may be shifting toward blue-chip stocks."
    )]
    DefensiveRotation,
    #[strum(
        serialize = "Inflation Concerns: A falling S&P 500 alongside rising crude oil and a stronger dollar may point to inflationary pressures."
    )]
    InflationConcerns,
    #[strum(
        serialize = "No dominant signal detected; the market could trade sideways or await further catalysts."
    )]
    Neutral,
}

impl MarketSignal {
    pub fn is_neutral(&self) -> bool {
        matches!(self, MarketSignal::Neutral)
    }
}

/// Percentage changes keyed by ticker. Missing tickers simply disable the rules that need them.
#[derive(Debug, Clone, Default)]
pub struct ChangeSnapshot {
    changes: HashMap<String, f64>,
}

impl ChangeSnapshot {
    pub fn insert(&mut self, ticker: impl Into<String>, pct: f64) {
        self.changes.insert(ticker.into(), pct);
    }

    pub fn get(&self, ticker: &str) -> Option<f64> {
        self.changes.get(ticker).copied()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Builds a snapshot from whatever outcomes are at hand (failed or empty ones are skipped).
    pub fn from_outcomes<'a>(
        outcomes: impl IntoIterator<Item = (&'a Symbol, &'a FetchOutcome)>,
    ) -> Self {
        let mut snapshot = Self::default();
        for (symbol, outcome) in outcomes {
            if let Some(change) = outcome.as_ref().ok().and_then(|s| compute_change(s)) {
                snapshot.insert(symbol.ticker(), change.pct);
            }
        }
        snapshot
    }
}

/// Heuristic read of the overnight tape. Always returns at least one entry.
pub fn analyze_market(snapshot: &ChangeSnapshot) -> Vec<MarketSignal> {
    let es = snapshot.get("ES=F");
    let nq = snapshot.get("NQ=F");
    let rty = snapshot.get("RTY=F");
    let zn = snapshot.get("ZN=F");
    let vx = snapshot.get("VX=F");
    let cl = snapshot.get("CL=F");
    let gc = snapshot.get("GC=F");
    let dxy = snapshot.get("DX-Y.NYB");

    let mut signals = Vec::new();

    if let (Some(es), Some(nq), Some(zn)) = (es, nq, zn) {
        if es > 0.0 && nq > 0.0 && zn < 0.0 {
            signals.push(MarketSignal::Bullish);
        }
    }

    if let (Some(es), Some(nq), Some(rty), Some(vx), Some(gc), Some(zn)) = (es, nq, rty, vx, gc, zn)
    {
        if es < 0.0 && nq < 0.0 && rty < 0.0 && (vx > 0.0 || gc > 0.0 || zn > 0.0) {
            signals.push(MarketSignal::Bearish);
        }
    }

    if let (Some(es), Some(nq), Some(rty)) = (es, nq, rty) {
        if es.abs() < FLAT_ES_PCT && nq < 0.0 && rty < 0.0 {
            signals.push(MarketSignal::DefensiveRotation);
        }
    }

    if let (Some(es), Some(cl), Some(dxy)) = (es, cl, dxy) {
        if es < 0.0 && cl > 0.0 && dxy > 0.0 {
            signals.push(MarketSignal::InflationConcerns);
        }
    }

    if signals.is_empty() {
        signals.push(MarketSignal::Neutral);
    }

    signals
}
