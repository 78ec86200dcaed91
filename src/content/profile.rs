/// Identity and contact details shown on the home page and footer.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    /// Public path of the downloadable resume
    pub cv_path: &'static str,
}

// Contact links are deployment-specific; replace before publishing.
pub const PROFILE: Profile = Profile {
    name: "Saleh Minawi",
    location: "France",
    email: "contact@example.com",
    github: "https://github.com/",
    linkedin: "https://www.linkedin.com/",
    cv_path: "/cv.pdf",
};
