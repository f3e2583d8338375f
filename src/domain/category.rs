use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::domain::symbol::Symbol;

/// The five fixed groups offered by the category selector.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[default]
    #[strum(to_string = "Index Futures", serialize = "index")]
    Index,
    #[strum(to_string = "Volatility Futures", serialize = "volatility")]
    Volatility,
    #[strum(to_string = "Bond Futures", serialize = "bond")]
    Bond,
    #[strum(to_string = "Commodity Futures", serialize = "commodity")]
    Commodity,
    #[strum(to_string = "Currency Futures", serialize = "currency")]
    Currency,
}

/// One chart panel: which ticker, what to call it, optional blurb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSpec {
    pub ticker: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl PanelSpec {
    pub fn symbol(&self) -> Symbol {
        Symbol::new(self.ticker)
    }
}

/// Static layout of a category. Each row is drawn as side-by-side columns.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDescriptor {
    pub category: Category,
    pub rows: &'static [&'static [PanelSpec]],
}

impl CategoryDescriptor {
    pub fn panels(&self) -> impl Iterator<Item = &'static PanelSpec> + '_ {
        self.rows.iter().flat_map(|row| row.iter())
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        self.panels().map(PanelSpec::symbol).collect()
    }
}

const ES: PanelSpec = PanelSpec {
    ticker: "ES=F",
    title: "S&P 500 Futures (ES)",
    description: "Broad large-cap benchmark. Overnight direction here usually sets the tone for the cash open.",
};
const NQ: PanelSpec = PanelSpec {
    ticker: "NQ=F",
    title: "Nasdaq 100 Futures (NQ)",
    description: "Tech-heavy growth index, most sensitive to rate expectations.",
};
const YM: PanelSpec = PanelSpec {
    ticker: "YM=F",
    title: "Dow Jones Futures (YM)",
    description: "Price-weighted blue chips. Holds up better than NQ during defensive rotations.",
};
const RTY: PanelSpec = PanelSpec {
    ticker: "RTY=F",
    title: "Russell 2000 Futures (RTY)",
    description: "Small caps. A read on domestic growth and credit appetite.",
};
const VX: PanelSpec = PanelSpec {
    ticker: "VX=F",
    title: "VIX Futures (VX)",
    description: "Expected 30-day S&P 500 volatility. Rising VX alongside falling equities signals risk-off.",
};
const ZN: PanelSpec = PanelSpec {
    ticker: "ZN=F",
    title: "10-Year Treasury Note Futures (ZN)",
    description: "Moves inversely to the 10-year yield.",
};
const ZB: PanelSpec = PanelSpec {
    ticker: "ZB=F",
    title: "30-Year Bond Futures (ZB)",
    description: "Long end of the curve. Most exposed to inflation expectations.",
};
const CL: PanelSpec = PanelSpec {
    ticker: "CL=F",
    title: "Crude Oil Futures (CL)",
    description: "WTI crude. Feeds directly into headline inflation.",
};
const GC: PanelSpec = PanelSpec {
    ticker: "GC=F",
    title: "Gold Futures (GC)",
    description: "Safe-haven bid shows up here first.",
};
const HG: PanelSpec = PanelSpec {
    ticker: "HG=F",
    title: "Copper Futures (HG)",
    description: "Industrial demand gauge.",
};
const DX: PanelSpec = PanelSpec {
    ticker: "DX-Y.NYB",
    title: "U.S. Dollar Index",
    description: "Dollar strength against a basket of six major currencies.",
};
const EURO: PanelSpec = PanelSpec {
    ticker: "6E=F",
    title: "Euro Futures (6E)",
    description: "",
};
const YEN: PanelSpec = PanelSpec {
    ticker: "6J=F",
    title: "Japanese Yen Futures (6J)",
    description: "",
};

pub static CATEGORIES: [CategoryDescriptor; 5] = [
    CategoryDescriptor {
        category: Category::Index,
        rows: &[&[ES, NQ], &[YM, RTY]],
    },
    CategoryDescriptor {
        category: Category::Volatility,
        rows: &[&[VX]],
    },
    CategoryDescriptor {
        category: Category::Bond,
        rows: &[&[ZN, ZB]],
    },
    CategoryDescriptor {
        category: Category::Commodity,
        rows: &[&[CL, GC, HG]],
    },
    CategoryDescriptor {
        category: Category::Currency,
        rows: &[&[DX], &[EURO, YEN]],
    },
];

impl Category {
    pub fn descriptor(self) -> &'static CategoryDescriptor {
        // CATEGORIES is declared in enum order
        &CATEGORIES[self as usize]
    }

    pub fn title(self) -> String {
        self.to_string()
    }
}

/// Every ticker on the dashboard, in category order.
pub fn all_symbols() -> Vec<Symbol> {
    Category::iter()
        .flat_map(|c| c.descriptor().symbols())
        .collect()
}
