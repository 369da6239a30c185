/// Looks up the BIC of a bank from its national identifier (the sort code
/// for GB and IE, the bank and branch code for MT). Supplied by the host
/// application; the engine never caches its answers.
pub trait BicFinder: Send + Sync {
    fn find_bic(&self, country_code: &str, national_id: &str) -> Option<String>;
}

impl<F> BicFinder for F
where
    F: Fn(&str, &str) -> Option<String> + Send + Sync,
{
    fn find_bic(&self, country_code: &str, national_id: &str) -> Option<String> {
        self(country_code, national_id)
    }
}
