//! Tab modes and the five device breakdown dimensions.
//!
//! A [`Mode`] is what the user picked; a [`Dimension`] is what actually gets
//! mounted, after escalating to the versions view when the query already pins a
//! single browser or OS.

use super::icons::{browser_icon_for, screen_size_glyph};
use crate::shared::list_report::Metric;
use contracts::dashboards::d402_devices::{BreakdownResponse, ListItem};
use contracts::shared::stats_query::{
    get_single_filter, has_goal_filter, is_filtering_on_fixed_value, DrilldownFilter, FilterClause,
    Query, NOT_SET,
};

/// Selected tab of the Devices card
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    #[default]
    Browser,
    Os,
    Size,
}

impl Mode {
    /// Persisted tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Browser => "browser",
            Mode::Os => "os",
            Mode::Size => "size",
        }
    }

    /// Pill label
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Browser => "Browser",
            Mode::Os => "OS",
            Mode::Size => "Size",
        }
    }

    pub fn all() -> [Mode; 3] {
        [Mode::Browser, Mode::Os, Mode::Size]
    }

    /// Mode from a stored tag.
    ///
    /// Nothing stored (or an empty tag) means `Browser`. An unrecognized tag
    /// lands on `Size`, the catch-all branch.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            None => Mode::default(),
            Some("browser") => Mode::Browser,
            Some("os") => Mode::Os,
            Some(_) => Mode::Size,
        }
    }
}

/// Storage key of the selected tab for a site
pub fn tab_storage_key(domain: &str) -> String {
    format!("deviceTab__{}", domain)
}

/// A breakdown axis with its endpoint, labels, drill-down and icon rules
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dimension {
    Browsers,
    BrowserVersions,
    OperatingSystems,
    OperatingSystemVersions,
    ScreenSizes,
}

/// Icon source for a row
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowIcon {
    /// Image path of a browser logo
    BrowserLogo(String),
    /// Inline SVG markup of a device class
    ScreenGlyph(&'static str),
}

impl Dimension {
    /// The single view mounted for a mode and query
    pub fn resolve(mode: Mode, query: &Query) -> Self {
        match mode {
            Mode::Browser if is_filtering_on_fixed_value(query, "browser") => {
                Dimension::BrowserVersions
            }
            Mode::Browser => Dimension::Browsers,
            Mode::Os if is_filtering_on_fixed_value(query, "os") => {
                Dimension::OperatingSystemVersions
            }
            Mode::Os => Dimension::OperatingSystems,
            Mode::Size => Dimension::ScreenSizes,
        }
    }

    /// Site-relative endpoint path
    pub fn endpoint(&self) -> &'static str {
        match self {
            Dimension::Browsers => "/browsers",
            Dimension::BrowserVersions => "/browser-versions",
            Dimension::OperatingSystems => "/operating-systems",
            Dimension::OperatingSystemVersions => "/operating-system-versions",
            Dimension::ScreenSizes => "/screen-sizes",
        }
    }

    pub fn key_label(&self) -> &'static str {
        match self {
            Dimension::Browsers => "Browser",
            Dimension::BrowserVersions => "Browser version",
            Dimension::OperatingSystems => "Operating system",
            Dimension::OperatingSystemVersions => "Operating System Version",
            Dimension::ScreenSizes => "Screen size",
        }
    }

    /// Filter key, also used as the drill-down prefix
    pub fn filter_key(&self) -> &'static str {
        match self {
            Dimension::Browsers => "browser",
            Dimension::BrowserVersions => "browser_version",
            Dimension::OperatingSystems => "os",
            Dimension::OperatingSystemVersions => "os_version",
            Dimension::ScreenSizes => "screen",
        }
    }

    /// Dimension whose single fixed value selected this view
    fn parent_key(&self) -> Option<&'static str> {
        match self {
            Dimension::BrowserVersions => Some("browser"),
            Dimension::OperatingSystemVersions => Some("os"),
            _ => None,
        }
    }

    /// Drill-down filter for a row.
    ///
    /// Version views return `None` when the parent filter is `(not set)`.
    pub fn filter_for(&self, query: &Query, item: &ListItem) -> Option<DrilldownFilter> {
        if let Some(parent) = self.parent_key() {
            if get_single_filter(query, parent) == Some(NOT_SET) {
                return None;
            }
        }

        Some(DrilldownFilter {
            prefix: self.filter_key().to_string(),
            filter: FilterClause::is(self.filter_key(), item.name.as_str()),
        })
    }

    /// Post-processing of a fetched response.
    ///
    /// Browser versions are renamed to `"<browser> <version>"`, which is also the
    /// value their drill-down filters on. Other dimensions pass through untouched.
    pub fn shape_response(&self, mut response: BreakdownResponse) -> BreakdownResponse {
        if *self == Dimension::BrowserVersions {
            for row in response.results.iter_mut() {
                if let Some(browser) = row.browser.as_deref() {
                    row.name = format!("{} {}", browser, row.name);
                }
            }
        }
        response
    }

    pub fn row_icon(&self, item: &ListItem) -> Option<RowIcon> {
        match self {
            Dimension::Browsers => Some(RowIcon::BrowserLogo(browser_icon_for(&item.name))),
            Dimension::BrowserVersions => Some(RowIcon::BrowserLogo(browser_icon_for(
                item.browser.as_deref().unwrap_or_default(),
            ))),
            Dimension::ScreenSizes => screen_size_glyph(&item.name).map(RowIcon::ScreenGlyph),
            Dimension::OperatingSystems | Dimension::OperatingSystemVersions => None,
        }
    }
}

/// Visitors and percentage, plus conversion rate when a goal is selected
pub fn metrics_for(query: &Query) -> Vec<Metric> {
    let mut metrics = vec![Metric::Visitors, Metric::Percentage];
    if has_goal_filter(query) {
        metrics.push(Metric::ConversionRate);
    }
    metrics
}
