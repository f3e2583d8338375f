/// Every user-facing string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub category_heading: &'static str,
    pub analysis_heading: &'static str,
    pub analysis_partial_note: &'static str,
    pub data_not_available: &'static str,
    pub no_data_prefix: &'static str,
    pub fetch_error_prefix: &'static str,
    pub waiting_for_data: &'static str,
    pub latest_label: &'static str,
    pub change_label: &'static str,
    pub change_unavailable: &'static str,
    pub status_refreshing: &'static str,
    pub status_next_refresh: &'static str,
    pub status_last_pass: &'static str,
    pub status_fetched: &'static str,
    pub status_cached: &'static str,
    pub status_unavailable: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub plot_reference_line: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Overnight Futures Dashboard",
    app_subtitle: "Live futures prices by category, refreshed every minute.",
    category_heading: "Category",
    analysis_heading: "Market Analysis",
    analysis_partial_note: "Based on the symbols fetched so far. Browse other categories (or start with --prefetch-all) to fill in the rest.",
    data_not_available: "Data not available",
    no_data_prefix: "No data returned for",
    fetch_error_prefix: "Error fetching data for",
    waiting_for_data: "Waiting for first refresh...",
    latest_label: "Latest",
    change_label: "Change",
    change_unavailable: "Change unavailable",
    status_refreshing: "Refreshing...",
    status_next_refresh: "Next refresh in",
    status_last_pass: "Last pass",
    status_fetched: "fetched",
    status_cached: "cached",
    status_unavailable: "unavailable",
    plot_x_axis: "Time",
    plot_y_axis: "Close",
    plot_reference_line: "Reference",
};
