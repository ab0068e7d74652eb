use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank candidates for one user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

impl FindMatchesRequest {
    /// Build a request from command-line style arguments (`<userId> [limit]`)
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let user_id = args.next().ok_or_else(|| "missing userId argument".to_string())?;
        let limit = args
            .next()
            .map(|raw| {
                raw.parse::<usize>()
                    .map_err(|e| format!("invalid limit {:?}: {}", raw, e))
            })
            .transpose()?;

        Ok(Self { user_id, limit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_from_args() {
        let req = FindMatchesRequest::from_args(args(&["u1", "5"])).unwrap();
        assert_eq!(req.user_id, "u1");
        assert_eq!(req.limit, Some(5));

        let req = FindMatchesRequest::from_args(args(&["u1"])).unwrap();
        assert_eq!(req.limit, None);
    }

    #[test]
    fn test_from_args_errors() {
        assert!(FindMatchesRequest::from_args(args(&[])).is_err());
        assert!(FindMatchesRequest::from_args(args(&["u1", "many"])).is_err());
    }

    #[test]
    fn test_validation() {
        let empty = FindMatchesRequest { user_id: String::new(), limit: None };
        assert!(empty.validate().is_err());

        let zero = FindMatchesRequest { user_id: "u1".to_string(), limit: Some(0) };
        assert!(zero.validate().is_err());
    }
}
