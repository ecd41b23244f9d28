/// The four views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Book,
    Dashboard,
    Admin,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Book => "/book",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Admin => "/admin",
        }
    }

    /// Translation key of the navbar label
    pub fn label_key(&self) -> &'static str {
        match self {
            AppRoute::Home => "navHome",
            AppRoute::Book => "navBook",
            AppRoute::Dashboard => "navDashboard",
            AppRoute::Admin => "navAdmin",
        }
    }

    pub fn all() -> [AppRoute; 4] {
        [
            AppRoute::Home,
            AppRoute::Book,
            AppRoute::Dashboard,
            AppRoute::Admin,
        ]
    }

    /// Exact match only; a trailing slash is tolerated
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::all().into_iter().find(|r| r.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/admin/"), Some(AppRoute::Admin));
        assert_eq!(AppRoute::from_path("/login"), None);
        assert_eq!(AppRoute::from_path("/book/42"), None);
    }
}
