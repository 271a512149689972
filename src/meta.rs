//! Static site metadata
//!
//! Built once at startup and emitted into the document head by the SSR
//! shell; no runtime behavior.

/// Site-wide metadata for SEO and social previews
#[derive(Clone, Copy, Debug)]
pub struct SiteMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub site_name: &'static str,
    pub url: &'static str,
    pub image: &'static str,
    pub twitter_handle: &'static str,
    pub locale: &'static str,
}

impl SiteMeta {
    /// Keywords joined for the `keywords` meta tag
    #[must_use]
    pub fn keywords_csv(&self) -> String {
        self.keywords.join(", ")
    }
}

pub static SITE: SiteMeta = SiteMeta {
    title: "Jobify Tracking App | Job Application Tracker",
    description: "Jobify is a full-featured job application tracker for job \
                  seekers: organize, track, and analyze your job search with \
                  a clean dashboard, searchable application list, and \
                  at-a-glance stats.",
    keywords: &[
        "Job Tracker",
        "Job Application",
        "Job Search",
        "Dashboard",
        "Analytics",
        "Career",
        "Dark Mode",
        "Open Source",
    ],
    author: "Jobify Team",
    site_name: "Jobify Tracking App",
    url: "https://jobify.example.com",
    image: "/pkg/main.svg",
    twitter_handle: "@jobify_app",
    locale: "en_US",
};
