use crate::solver::SolverConfig;

pub const GIT_DESCRIBE: &str = env!("GIT_DESCRIBE");
pub const GIT_HASH: &str = env!("GIT_HASH");

/// Build and configuration report, printed to stderr
/// so stdout carries only the field.
pub fn print_report(name: &str, config: &SolverConfig) {
    eprintln!("{}", report(name, config));
}

pub fn report(name: &str, config: &SolverConfig) -> String {
    format!(
        "{{\n  \"name\": \"{}\",\n  \"git_describe\": \"{}\",\n  \"git_hash\": \"{}\",\n  \"size\": {},\n  \"iterations\": {},\n  \"threads\": {},\n  \"delta\": {}\n}}",
        name,
        GIT_DESCRIBE,
        GIT_HASH,
        config.size,
        config.iterations,
        config.threads,
        config.delta
    )
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn report_has_config() {
        let config = SolverConfig::new(9).with_threads(2).with_iterations(4);
        let r = report("poisson", &config);
        assert!(r.contains("\"name\": \"poisson\""));
        assert!(r.contains("\"size\": 9"));
        assert!(r.contains("\"threads\": 2"));
        assert!(r.contains("\"iterations\": 4"));
    }
}
