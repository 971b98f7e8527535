#[cfg(debug_assertions)]
pub fn get_calendly_url() -> &'static str {
    "https://calendly.com/revmachine/discovery-call-test"  // Sandbox event when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_calendly_url() -> &'static str {
    "https://calendly.com/revmachine/discovery-call"  // Production event
}
