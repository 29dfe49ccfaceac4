const MAX_DIGITS: usize = 11;

/// Re-punctuates a Brazilian phone number as it is being typed.
///
/// `"11"` becomes `"(11"`, `"119999"` becomes `"(11) 9999"`, ten digits get a
/// four digit prefix and eleven digits a five digit one. Input holding more
/// than eleven digits is returned untouched so nothing the user typed is lost.
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() > MAX_DIGITS {
        return input.to_string();
    }

    let (area, local) = digits.split_at(digits.len().min(2));
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({}", area),
        3..=6 => format!("({}) {}", area, local),
        7..=10 => {
            let (prefix, suffix) = local.split_at(4);
            format!("({}) {}-{}", area, prefix, suffix)
        }
        _ => {
            let (prefix, suffix) = local.split_at(5);
            format!("({}) {}-{}", area, prefix, suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_partial_input() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("11"), "(11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("119999"), "(11) 9999");
        assert_eq!(format_phone("1199999"), "(11) 9999-9");
    }

    #[test]
    fn formats_complete_numbers() {
        assert_eq!(format_phone("1532221234"), "(15) 3222-1234");
        assert_eq!(format_phone("11999999999"), "(11) 99999-9999");
        assert_eq!(format_phone("11 9.9999 9999"), "(11) 99999-9999");
    }

    #[test]
    fn leaves_overlong_input_alone() {
        assert_eq!(format_phone("(11) 99999-99999"), "(11) 99999-99999");
        assert_eq!(format_phone("5511999999999"), "5511999999999");
    }

    #[test]
    fn formatting_is_stable() {
        let inputs = [
            "",
            "1",
            "(11",
            "(11) 9",
            "119999",
            "(11) 9999-9",
            "(15) 3222-1234",
            "11999999999",
            "abc",
            "+55 (11) 99999-9999",
        ];
        for input in inputs {
            let once = format_phone(input);
            assert_eq!(format_phone(&once), once, "{input:?}");
        }
    }
}
