pub fn fmt_points(points: f64) -> String {
    format!("{:.1}", points)
}

pub fn fmt_grade_points(total: f64) -> String {
    format!("{:.2}", total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_show_one_decimal_place() {
        assert_eq!(fmt_points(9.0), "9.0");
        assert_eq!(fmt_points(3.7), "3.7");
        assert_eq!(fmt_points(96.8), "96.8");
    }

    #[test]
    fn grade_point_totals_show_two_decimal_places() {
        assert_eq!(fmt_grade_points(96.8), "96.80");
        assert_eq!(fmt_grade_points(0.0), "0.00");
    }
}
