// src/report/mod.rs
//
// Plain-text rendering of a finished run: verdict card, group table,
// metrics row, and a bar chart of the two conversion rates. Everything
// numeric goes through `format_sig`, which renders three significant
// figures the way printf's %g does.

use crate::models::{GroupObservation, SignificanceResult, TestConfiguration};
use chrono::Utc;

/// Width of the longest conversion-rate bar, in characters.
const BAR_WIDTH: usize = 40;

// =============================================================================
// Report Rendering
// =============================================================================

/// Renders the full report for one finished run.
pub fn render_report(
    group_a: &GroupObservation,
    group_b: &GroupObservation,
    config: &TestConfiguration,
    result: &SignificanceResult,
) -> String {
    let rule = "=".repeat(62);
    let verdict = if result.is_significant { "YES" } else { "NO" };

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(" A/B Test Significance Report\n");
    out.push_str(&format!(
        " Generated: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&rule);
    out.push_str("\n\n");

    out.push_str(&format!(" Delta: {}%\n", format_sig(result.difference, 3)));
    out.push_str(&format!(" Significant? {}\n\n", verdict));

    out.push_str(&format!(
        " {:<8} {:>8} {:>12}   {}\n",
        "Group", "Event", "Population", "% events in the population"
    ));
    out.push_str(&format!(
        " {:<8} {:>8} {:>12}   {}\n",
        "A",
        group_a.events(),
        group_a.population(),
        format_sig(result.rate_a, 3)
    ));
    out.push_str(&format!(
        " {:<8} {:>8} {:>12}   {}\n\n",
        "B",
        group_b.events(),
        group_b.population(),
        format_sig(result.rate_b, 3)
    ));

    out.push_str(&format!(
        " {:<10} {:<10} {:<10}\n",
        "p-value", "z-score", "diff"
    ));
    out.push_str(&format!(
        " {:<10} {:<10} {:<10}\n\n",
        format_sig(result.p_value, 3),
        format_sig(result.z_score, 3),
        format_sig(result.difference, 3)
    ));

    out.push_str(" Conversion rates\n");
    let max_rate = result.rate_a.max(result.rate_b);
    out.push_str(&render_bar("A", result.rate_a, max_rate));
    out.push_str(&render_bar("B", result.rate_b, max_rate));
    out.push('\n');

    out.push_str(&format!(
        " Test: {}, {} estimator, alpha = {}\n",
        config.hypothesis(),
        config.method(),
        config.alpha()
    ));
    out.push_str(&rule);
    out.push('\n');
    out
}

fn render_bar(label: &str, rate: f64, max_rate: f64) -> String {
    let filled = if max_rate > 0.0 {
        ((rate / max_rate) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    format!(" {} | {} {}%\n", label, "#".repeat(filled), format_sig(rate, 3))
}

// =============================================================================
// Significant-Figure Formatting
// =============================================================================

/// Formats `value` to `digits` significant figures, printf %g style:
/// trailing zeros trimmed, scientific notation once the exponent leaves
/// [-4, digits), exponent padded to two digits.
pub fn format_sig(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let digits = digits.max(1);

    let mut exp = value.abs().log10().floor() as i32;
    // Rounding can carry into the next decade (0.9996 -> "1").
    let scale = 10f64.powi(digits as i32 - 1 - exp);
    let rounded = (value * scale).round() / scale;
    if (rounded.abs().log10().floor() as i32) > exp {
        exp += 1;
    }

    if exp < -4 || exp >= digits as i32 {
        let s = format!("{:.*e}", digits - 1, value);
        let (mantissa, exp_part) = match s.split_once('e') {
            Some(pair) => pair,
            None => (s.as_str(), "0"),
        };
        let exp_num: i32 = exp_part.parse().unwrap_or(0);
        let sign = if exp_num < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_decimal(mantissa), sign, exp_num.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_decimal(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_decimal(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::run_significance_test;
    use crate::models::ZMethod;

    #[test]
    fn test_format_sig_fixed_notation() {
        assert_eq!(format_sig(10.087719298245613, 3), "10.1");
        assert_eq!(format_sig(11.811023622047244, 3), "11.8");
        assert_eq!(format_sig(1.723304323801631, 3), "1.72");
        assert_eq!(format_sig(-1.723304323801631, 3), "-1.72");
        assert_eq!(format_sig(0.545967183573495, 3), "0.546");
        assert_eq!(format_sig(0.050515873176596, 3), "0.0505");
        assert_eq!(format_sig(1.955568446365828, 3), "1.96");
        assert_eq!(format_sig(0.606297280348060, 3), "0.606");
        assert_eq!(format_sig(0.5, 3), "0.5");
        assert_eq!(format_sig(1.0, 3), "1");
        assert_eq!(format_sig(0.0, 3), "0");
        assert_eq!(format_sig(100.0, 3), "100");
    }

    #[test]
    fn test_format_sig_rounding_carries_decades() {
        assert_eq!(format_sig(0.9996, 3), "1");
        assert_eq!(format_sig(99.96, 3), "100");
        assert_eq!(format_sig(999.6, 3), "1e+03");
    }

    #[test]
    fn test_format_sig_scientific_notation() {
        assert_eq!(format_sig(1.234e-05, 3), "1.23e-05");
        assert_eq!(format_sig(1234.5, 3), "1.23e+03");
        assert_eq!(format_sig(1e-100, 3), "1e-100");
    }

    #[test]
    fn test_format_sig_non_finite() {
        assert_eq!(format_sig(f64::NAN, 3), "NaN");
        assert_eq!(format_sig(f64::INFINITY, 3), "inf");
        assert_eq!(format_sig(f64::NEG_INFINITY, 3), "-inf");
    }

    #[test]
    fn test_report_reference_groups() {
        let a = GroupObservation::new(23, 228).unwrap();
        let b = GroupObservation::new(30, 254).unwrap();
        let config = TestConfiguration::default();
        let result = run_significance_test(&a, &b, &config).unwrap();

        let report = render_report(&a, &b, &config, &result);
        assert!(report.contains(" Delta: 1.72%"));
        assert!(report.contains(" Significant? NO"));
        assert!(report.contains("% events in the population"));
        assert!(report.contains("10.1"));
        assert!(report.contains("11.8"));
        assert!(report.contains("0.546"));
        assert!(report.contains("0.604"));
        assert!(report.contains("Two-sided, pooled estimator, alpha = 0.05"));
    }

    #[test]
    fn test_report_significant_verdict() {
        let a = GroupObservation::new(23, 228).unwrap();
        let b = GroupObservation::new(41, 254).unwrap();
        let config = TestConfiguration::default().with_method(ZMethod::Unpooled);
        let result = run_significance_test(&a, &b, &config).unwrap();

        assert!(result.is_significant);
        let report = render_report(&a, &b, &config, &result);
        assert!(report.contains(" Significant? YES"));
        assert!(report.contains("unpooled estimator"));
    }

    #[test]
    fn test_bars_scale_to_the_larger_rate() {
        let bar_b = render_bar("B", 11.811023622047244, 11.811023622047244);
        let bar_a = render_bar("A", 10.087719298245613, 11.811023622047244);
        assert_eq!(bar_b, format!(" B | {} 11.8%\n", "#".repeat(BAR_WIDTH)));
        // 10.0877 / 11.8110 of 40 columns rounds to 34.
        assert_eq!(bar_a, format!(" A | {} 10.1%\n", "#".repeat(34)));
    }

    #[test]
    fn test_bars_handle_zero_rates() {
        let bar = render_bar("A", 0.0, 0.0);
        assert_eq!(bar, " A |  0%\n");
    }
}
