use crate::shared::components::table::{format_number_short, format_percentage};
use contracts::dashboards::d402_devices::ListItem;

/// Column shown next to each row of a list report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Visitors,
    Percentage,
    ConversionRate,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Visitors => "Visitors",
            Metric::Percentage => "%",
            Metric::ConversionRate => "CR",
        }
    }

    /// Formatted cell value; `-` when the API did not return the metric
    pub fn format_value(&self, item: &ListItem) -> String {
        let value = match self {
            Metric::Visitors => Some(format_number_short(item.visitors)),
            Metric::Percentage => item.percentage.map(format_percentage),
            Metric::ConversionRate => item.conversion_rate.map(format_percentage),
        };
        value.unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        let mut item = ListItem::new("Chrome", 1_234);
        item.percentage = Some(61.66);

        assert_eq!(Metric::Visitors.format_value(&item), "1.2k");
        assert_eq!(Metric::Percentage.format_value(&item), "61.7%");
        assert_eq!(Metric::ConversionRate.format_value(&item), "-");

        item.conversion_rate = Some(3.0);
        assert_eq!(Metric::ConversionRate.format_value(&item), "3%");
    }
}
