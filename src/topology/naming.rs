//! Host identity helpers.

use crate::blueprint::HostCategory;
use rand::seq::SliceRandom;
use rand::Rng;

/// Department codes mixed into hostnames
pub const DEPARTMENTS: [&str; 5] = ["FIN", "HR", "ENG", "IT", "SALES"];

/// Host identifier for the 1-based assembly index
pub fn node_id(index: usize) -> String {
    format!("node-{}", index)
}

/// Hostname like `SERV-FIN-03`. Not checked for uniqueness.
pub fn generate_hostname<R: Rng + ?Sized>(category: HostCategory, index: usize, rng: &mut R) -> String {
    let department = DEPARTMENTS.choose(rng).copied().unwrap_or("IT");
    format!("{}-{}-{:02}", category.hostname_prefix(), department, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hostname_format() {
        let mut rng = StdRng::seed_from_u64(0);
        for index in [1, 9, 10, 123] {
            let hostname = generate_hostname(HostCategory::Workstation, index, &mut rng);
            let parts: Vec<&str> = hostname.split('-').collect();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0], "WKST");
            assert!(DEPARTMENTS.contains(&parts[1]));
            assert_eq!(parts[2], format!("{:02}", index));
        }
    }

    #[test]
    fn test_prefix_per_category() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_hostname(HostCategory::Server, 1, &mut rng).starts_with("SERV-"));
        assert!(generate_hostname(HostCategory::Infra, 2, &mut rng).starts_with("INFR-"));
        assert!(generate_hostname(HostCategory::Workstation, 3, &mut rng).ends_with("-03"));
    }

    #[test]
    fn test_node_id() {
        assert_eq!(node_id(7), "node-7");
    }
}
