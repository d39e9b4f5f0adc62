//! Route matching for the portal's pages.
//!
//! Matching is exact on the path string: no trailing-slash normalization,
//! no query handling. The current path is evaluated once per page load.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Resources,
    ResourceDetail(u64),
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/resources" => Self::Resources,
            _ => path
                .strip_prefix("/resource/")
                .and_then(|id| id.parse::<u64>().ok())
                .map_or(Self::NotFound, Self::ResourceDetail),
        }
    }

    /// Path for links and navigation. `NotFound` maps to home.
    pub fn href(&self) -> String {
        match self {
            Self::Home | Self::NotFound => "/".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Resources => "/resources".to_owned(),
            Self::ResourceDetail(id) => format!("/resource/{id}"),
        }
    }

    /// Whether landing on this route triggers the resource list request.
    pub fn loads_resources(&self) -> bool {
        matches!(self, Self::Resources)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Resource Portal",
            Self::Login => "Log in",
            Self::Register => "Register",
            Self::Resources => "Resources",
            Self::ResourceDetail(_) => "Resource",
            Self::NotFound => "Not found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}
