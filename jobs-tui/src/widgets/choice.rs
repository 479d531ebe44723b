/// Step through a fixed option list, wrapping at both ends.
pub fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let Some(index) = options.iter().position(|o| *o == current) else {
        return options.first().copied().unwrap_or(current);
    };
    let len = options.len();
    let next = if forward { (index + 1) % len } else { (index + len - 1) % len };
    options[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobs_lib::model::Workplace;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(&Workplace::ALL, Workplace::Remote, true), Workplace::Office);
        assert_eq!(cycle(&Workplace::ALL, Workplace::Office, false), Workplace::Remote);
        assert_eq!(cycle(&Workplace::ALL, Workplace::Hybrid, true), Workplace::Flexible);
    }
}
