use ecow::EcoString;
use handoff_library::diag::{DiagResult, bail};

/// The two halves of a full name.
///
/// Both fields exist on every value of this type, so a successful split
/// always produces both outputs. A caller that wants only one of them
/// destructures the other away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitName {
    pub first: EcoString,
    pub last: EcoString,
}

/// Split `name` at its last space: everything before it becomes the
/// first name(s), everything after it the last name.
///
/// A name without any space has no split point and is rejected.
pub fn split(name: &str) -> DiagResult<SplitName> {
    let Some((first, last)) = name.rsplit_once(' ') else {
        bail!(
            "no separator in name `{name}`";
            hint: "a full name needs at least one space between its parts"
        );
    };

    Ok(SplitName {
        first: first.into(),
        last: last.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::split;

    #[test]
    fn splits_at_the_last_space() {
        let parts = split("Stevie Ray Vaughan").unwrap();
        assert_eq!(parts.first, "Stevie Ray");
        assert_eq!(parts.last, "Vaughan");
    }

    #[test]
    fn splits_a_two_part_name() {
        let parts = split("Django Reinhardt").unwrap();
        assert_eq!(parts.first, "Django");
        assert_eq!(parts.last, "Reinhardt");
    }

    #[test]
    fn a_trailing_space_leaves_the_last_part_empty() {
        let parts = split("Stevie Ray Vaughan ").unwrap();
        assert_eq!(parts.first, "Stevie Ray Vaughan");
        assert_eq!(parts.last, "");
    }

    #[test]
    fn a_name_without_spaces_is_rejected() {
        let errors = split("Prince").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "no separator in name `Prince`");
        assert!(!errors[0].hints.is_empty());
    }
}
