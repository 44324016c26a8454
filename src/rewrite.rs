use crate::error::Result;
use regex::{Captures, Regex};

/// A compiled find/replace rule applied to a whole file in one pass.
#[derive(Debug, Clone)]
pub struct Rewrite {
    name: &'static str,
    regex: Regex,
    template: String,
    confirmation: String,
}

impl Rewrite {
    /// Compile a rule. `template` may refer to capture groups as `${group}`.
    pub fn new(
        name: &'static str,
        pattern: &str,
        template: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
            template: template.into(),
            confirmation: confirmation.into(),
        })
    }

    /// `'/images/project_sites/<name>'` -> `buildGeneralImageUrl('project_sites/<name>')`
    pub fn path_to_general_call() -> Result<Self> {
        Self::new(
            "path-to-general-call",
            r"'/images/project_sites/(?P<name>[^']+)'",
            "buildGeneralImageUrl('project_sites/${name}')",
            "✓ Converted all /images/project_sites/ paths to buildGeneralImageUrl() calls",
        )
    }

    /// `buildGeneralImageUrl('project_sites/<name>')` -> `buildProjectSiteUrl('<name>')`
    pub fn general_to_project_site_call() -> Result<Self> {
        Self::new(
            "general-to-project-site-call",
            r"buildGeneralImageUrl\('project_sites/(?P<name>[^']+)'\)",
            "buildProjectSiteUrl('${name}')",
            "✓ Converted all buildGeneralImageUrl('project_sites/...') calls to buildProjectSiteUrl('...')",
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn confirmation(&self) -> &str {
        &self.confirmation
    }

    /// Replace every match in `text`, returning the new text and the number
    /// of replacements made.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut replacements = 0;
        let result = self.regex.replace_all(text, |caps: &Captures<'_>| {
            replacements += 1;
            let mut expanded = String::new();
            caps.expand(&self.template, &mut expanded);
            expanded
        });

        (result.into_owned(), replacements)
    }
}
