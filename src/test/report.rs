#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        app::report,
        models::{MoverRecord, MoverSet},
    };

    fn record(symbol: &str, change_percent: Decimal, ytd_change: Decimal) -> MoverRecord {
        MoverRecord::new(
            symbol.to_string(),
            format!("{} Inc", symbol),
            dec!(100),
            dec!(90),
            change_percent,
            ytd_change,
        )
    }

    #[test]
    fn empty_set_renders_both_sections_in_order() {
        let html = report::render(&MoverSet::new(vec![], vec![]));

        let gainers = html.find("<h2>Gainers</h2>").unwrap();
        let losers = html.find("<h2>Losers</h2>").unwrap();

        assert!(gainers < losers);
        assert_eq!(html.matches("<h2>").count(), 2);
        assert_eq!(html.matches("<table>").count(), 2);
        assert_eq!(html.matches("<td>").count(), 0);
    }

    #[test]
    fn rows_sorted_by_descending_absolute_change() {
        let losers = vec![
            record("AAA", dec!(-0.02), dec!(0.1)),
            record("BBB", dec!(-0.10), dec!(0.1)),
            record("CCC", dec!(-0.05), dec!(0.1)),
        ];
        let html = report::render(&MoverSet::new(vec![], losers));

        let first = html.find("<td>BBB</td>").unwrap();
        let second = html.find("<td>CCC</td>").unwrap();
        let third = html.find("<td>AAA</td>").unwrap();

        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn equal_magnitudes_keep_input_order() {
        let gainers = vec![
            record("AAA", dec!(0.05), dec!(0.1)),
            record("BBB", dec!(-0.05), dec!(0.1)),
        ];
        let html = report::render(&MoverSet::new(gainers, vec![]));

        assert!(html.find("<td>AAA</td>").unwrap() < html.find("<td>BBB</td>").unwrap());
    }

    #[test]
    fn percent_change_is_scaled_and_rounded_to_two_decimals() {
        let gainers = vec![record("AAA", dec!(0.05678), dec!(0.1))];
        let html = report::render(&MoverSet::new(gainers, vec![]));

        assert!(html.contains("<td>5.68</td>"));
    }

    #[test]
    fn midpoints_round_toward_positive_infinity() {
        let gainers = vec![record("AAA", dec!(0.05675), dec!(0.1))];
        let losers = vec![record("BBB", dec!(-0.05675), dec!(-2.345))];
        let html = report::render(&MoverSet::new(gainers, losers));

        assert!(html.contains("<td>5.68</td>"));
        assert!(html.contains("<td>-5.67</td>"));
        assert!(html.contains("<td>-2.34</td>"));
    }

    #[test]
    fn ytd_change_is_rounded_without_percent_scaling() {
        let gainers = vec![record("AAA", dec!(0.05), dec!(12.345))];
        let html = report::render(&MoverSet::new(gainers, vec![]));

        assert!(html.contains("<td>12.35</td>"));
    }

    #[test]
    fn single_gainer_and_empty_losers() {
        let gainers = vec![MoverRecord::new(
            "AAA".to_string(),
            "A Co".to_string(),
            dec!(100),
            dec!(90),
            dec!(0.10),
            dec!(5.0),
        )];
        let html = report::render(&MoverSet::new(gainers, vec![]));

        assert!(html.contains("<td>10.00</td>"));
        assert!(html.contains("<td>AAA</td>"));
        assert!(html.contains("<td>A Co</td>"));
        assert!(html.contains("<td>100</td>"));
        assert!(html.contains("<td>90</td>"));

        let (_, losers_section) = html.split_once("<h2>Losers</h2>").unwrap();
        assert_eq!(losers_section.matches("<td>").count(), 0);
    }
}
