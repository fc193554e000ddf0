#[derive(Debug, PartialEq, Eq)]
pub(crate) enum DashboardEndpoint {
    Page,
    Locations,
    Static,
}

impl DashboardEndpoint {
    pub(crate) fn from_path(path: &str, static_prefix: &str) -> Option<Self> {
        match path {
            "/" | "/index.html" => Some(Self::Page),
            "/api/locations" => Some(Self::Locations),
            _ if is_under(path, static_prefix) => Some(Self::Static),
            _ => None,
        }
    }
}

fn is_under(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}
