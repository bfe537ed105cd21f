use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use crate::portfolio::adapter::outgoing::TracingThemeObserver;
use crate::portfolio::application::ports::outgoing::{
    DurableStore, DurableStoreError, ThemeObserver,
};
use crate::portfolio::domain::admin_gate::{AdminGate, DEFAULT_ADMIN_SECRET};
use crate::portfolio::domain::entities::{
    Certification, CertificationDraft, CertificationPatch, Education, EducationDraft,
    EducationPatch, Experience, ExperienceDraft, ExperiencePatch, PortfolioSnapshot,
    PortfolioView, Profile, ProfilePatch, Project, ProjectDraft, ProjectPatch, Resume, Theme,
};
use crate::portfolio::domain::seed::bundled_seed;

pub const DEFAULT_CONTENT_KEY: &str = "portfolio_data";
pub const DEFAULT_THEME_KEY: &str = "theme";

//
// ──────────────────────────────────────────────────────────
// Settings / errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Key holding the serialized content snapshot.
    pub content_key: String,
    /// Separate key holding the bare theme string.
    pub theme_key: String,
    pub admin_secret: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            content_key: DEFAULT_CONTENT_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            admin_secret: DEFAULT_ADMIN_SECRET.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PortfolioStoreError {
    #[error("Bundled seed dataset is invalid: {0}")]
    Seed(serde_json::Error),

    #[error("Failed to encode portfolio snapshot: {0}")]
    Encode(serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] DurableStoreError),
}

/// Outcome of the most recent content write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistStatus {
    Synced,
    /// Persisted content was partly unreadable at open, so the durable copy
    /// is left as-is until the next mutation.
    Deferred,
    /// In-memory state is ahead of the durable copy.
    Failed(String),
}

//
// ──────────────────────────────────────────────────────────
// Store
// ──────────────────────────────────────────────────────────
//

/// Single source of truth for portfolio content.
///
/// Every content mutation is written through to the durable store on a
/// best-effort basis: write failures are logged and recorded in
/// [`PersistStatus`] but never roll back memory and never reach the caller.
///
/// Admin mode lives here only as UI state. Mutations do not check it; gating
/// editing is the presentation layer's job.
pub struct PortfolioStore<S: DurableStore> {
    durable: S,
    settings: StoreSettings,
    content: PortfolioSnapshot,
    admin: AdminGate,
    theme: Theme,
    theme_observer: Arc<dyn ThemeObserver>,
    persist_status: PersistStatus,
}

impl<S: DurableStore> PortfolioStore<S> {
    pub fn open(durable: S, settings: StoreSettings) -> Result<Self, PortfolioStoreError> {
        Self::open_with_observer(durable, settings, Arc::new(TracingThemeObserver))
    }

    /// Builds the state graph: seed overlaid with whatever was persisted.
    /// Admin mode always starts off.
    pub fn open_with_observer(
        durable: S,
        settings: StoreSettings,
        theme_observer: Arc<dyn ThemeObserver>,
    ) -> Result<Self, PortfolioStoreError> {
        let seed = bundled_seed().map_err(PortfolioStoreError::Seed)?;
        let (content, clean) = match load_stored_content(&durable, &settings.content_key) {
            StoredContent::Absent => (seed, true),
            StoredContent::Unusable => (seed, false),
            StoredContent::Object(stored) => {
                let overlaid = seed.overlay(&stored);
                let clean = overlaid.is_clean();
                (overlaid.snapshot, clean)
            }
        };
        let theme = load_theme(&durable, &settings.theme_key);

        let mut store = Self {
            admin: AdminGate::new(settings.admin_secret.clone()),
            durable,
            settings,
            content,
            theme,
            theme_observer,
            persist_status: PersistStatus::Synced,
        };

        info!(
            projects = store.content.projects.len(),
            experience = store.content.experience.len(),
            education = store.content.education.len(),
            certifications = store.content.certifications.len(),
            skills = store.content.skills.len(),
            theme = %store.theme,
            "Portfolio store initialized"
        );

        // Mirror the initial state back out, same as after any change, unless
        // that would overwrite stored content we could not fully read.
        if clean {
            store.persist();
        } else {
            warn!(
                key = %store.settings.content_key,
                "Persisted portfolio was partly unreadable, leaving it untouched until the next edit"
            );
            store.persist_status = PersistStatus::Deferred;
        }
        store.apply_theme();

        Ok(store)
    }

    // ── Read contract ─────────────────────────────────────

    pub fn view(&self) -> PortfolioView {
        PortfolioView {
            content: self.content.clone(),
            admin_mode: self.admin.is_active(),
            theme: self.theme,
        }
    }

    pub fn snapshot(&self) -> &PortfolioSnapshot {
        &self.content
    }

    pub fn profile(&self) -> &Profile {
        &self.content.profile
    }

    pub fn resume(&self) -> &Resume {
        &self.content.resume
    }

    pub fn skills(&self) -> &[String] {
        &self.content.skills
    }

    pub fn projects(&self) -> &[Project] {
        self.content.projects.as_slice()
    }

    pub fn experience(&self) -> &[Experience] {
        self.content.experience.as_slice()
    }

    pub fn education(&self) -> &[Education] {
        self.content.education.as_slice()
    }

    pub fn certifications(&self) -> &[Certification] {
        self.content.certifications.as_slice()
    }

    pub fn is_admin_mode(&self) -> bool {
        self.admin.is_active()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn persist_status(&self) -> &PersistStatus {
        &self.persist_status
    }

    pub fn durable(&self) -> &S {
        &self.durable
    }

    // ── Profile / resume ──────────────────────────────────

    pub fn update_profile(&mut self, patch: ProfilePatch) {
        self.content.profile.apply(patch);
        self.persist();
    }

    pub fn update_profile_photo(&mut self, reference: impl Into<String>) {
        self.content.profile.photo = reference.into();
        self.persist();
    }

    /// An empty reference clears the url but still marks the resume parsed.
    pub fn update_resume(&mut self, reference: impl Into<String>) {
        self.content.resume = Resume::assigned(reference.into());
        self.persist();
    }

    // ── Skills ────────────────────────────────────────────

    /// Exact, case-sensitive duplicate check. A duplicate leaves state and
    /// storage untouched.
    pub fn add_skill(&mut self, name: &str) {
        if self.content.skills.iter().any(|s| s == name) {
            debug!(skill = name, "Skill already present, ignoring");
            return;
        }
        self.content.skills.push(name.to_string());
        self.persist();
    }

    pub fn remove_skill(&mut self, name: &str) {
        self.content.skills.retain(|s| s != name);
        self.persist();
    }

    // ── Projects ──────────────────────────────────────────

    pub fn add_project(&mut self, draft: ProjectDraft) -> Project {
        let project = self.content.projects.insert(draft).clone();
        self.persist();
        project
    }

    /// Returns whether a project with `id` existed.
    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> bool {
        let found = self.content.projects.update(id, patch);
        self.persist();
        found
    }

    pub fn delete_project(&mut self, id: &str) -> bool {
        let found = self.content.projects.remove(id);
        self.persist();
        found
    }

    /// Takes the new order as-is; no permutation check.
    pub fn reorder_projects(&mut self, projects: Vec<Project>) {
        self.content.projects.replace(projects);
        self.persist();
    }

    // ── Experience ────────────────────────────────────────

    pub fn add_experience(&mut self, draft: ExperienceDraft) -> Experience {
        let experience = self.content.experience.insert(draft).clone();
        self.persist();
        experience
    }

    pub fn update_experience(&mut self, id: &str, patch: ExperiencePatch) -> bool {
        let found = self.content.experience.update(id, patch);
        self.persist();
        found
    }

    pub fn delete_experience(&mut self, id: &str) -> bool {
        let found = self.content.experience.remove(id);
        self.persist();
        found
    }

    // ── Education ─────────────────────────────────────────

    pub fn add_education(&mut self, draft: EducationDraft) -> Education {
        let education = self.content.education.insert(draft).clone();
        self.persist();
        education
    }

    pub fn update_education(&mut self, id: &str, patch: EducationPatch) -> bool {
        let found = self.content.education.update(id, patch);
        self.persist();
        found
    }

    pub fn delete_education(&mut self, id: &str) -> bool {
        let found = self.content.education.remove(id);
        self.persist();
        found
    }

    // ── Certifications ────────────────────────────────────

    pub fn add_certification(&mut self, draft: CertificationDraft) -> Certification {
        let certification = self.content.certifications.insert(draft).clone();
        self.persist();
        certification
    }

    pub fn update_certification(&mut self, id: &str, patch: CertificationPatch) -> bool {
        let found = self.content.certifications.update(id, patch);
        self.persist();
        found
    }

    pub fn delete_certification(&mut self, id: &str) -> bool {
        let found = self.content.certifications.remove(id);
        self.persist();
        found
    }

    // ── Admin mode (not persisted) ────────────────────────

    /// See [`AdminGate::toggle`].
    pub fn toggle_admin_mode(&mut self, secret: Option<&str>) -> bool {
        let was_active = self.admin.is_active();
        let success = self.admin.toggle(secret);

        match (was_active, success) {
            (true, _) => info!("Admin mode disabled"),
            (false, true) => info!("Admin mode enabled"),
            (false, false) => warn!("Admin mode login rejected: wrong secret"),
        }
        success
    }

    pub fn logout(&mut self) {
        self.admin.logout();
        info!("Admin logged out");
    }

    // ── Theme ─────────────────────────────────────────────

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.apply_theme();
    }

    // ── Persistence ───────────────────────────────────────

    fn write_content(&self) -> Result<(), PortfolioStoreError> {
        let json = serde_json::to_string(&self.content).map_err(PortfolioStoreError::Encode)?;
        self.durable.set(&self.settings.content_key, &json)?;
        Ok(())
    }

    fn persist(&mut self) {
        match self.write_content() {
            Ok(()) => {
                debug!(key = %self.settings.content_key, "Portfolio content persisted");
                self.persist_status = PersistStatus::Synced;
            }
            Err(e) => {
                error!(
                    error = %e,
                    key = %self.settings.content_key,
                    "Failed to persist portfolio content; keeping in-memory state"
                );
                self.persist_status = PersistStatus::Failed(e.to_string());
            }
        }
    }

    fn apply_theme(&self) {
        self.theme_observer.theme_changed(self.theme);

        if let Err(e) = self
            .durable
            .set(&self.settings.theme_key, self.theme.as_str())
        {
            error!(error = %e, key = %self.settings.theme_key, "Failed to persist theme");
        }
    }
}

enum StoredContent {
    Absent,
    /// Present but unreadable: not an object, invalid JSON or a failed read.
    Unusable,
    Object(Map<String, Value>),
}

fn load_stored_content<S: DurableStore>(durable: &S, key: &str) -> StoredContent {
    let raw = match durable.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return StoredContent::Absent,
        Err(e) => {
            warn!(error = %e, key, "Could not read persisted portfolio, using seed");
            return StoredContent::Unusable;
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => StoredContent::Object(map),
        Ok(_) => {
            warn!(key, "Persisted portfolio is not a JSON object, using seed");
            StoredContent::Unusable
        }
        Err(e) => {
            warn!(error = %e, key, "Persisted portfolio is not valid JSON, using seed");
            StoredContent::Unusable
        }
    }
}

fn load_theme<S: DurableStore>(durable: &S, key: &str) -> Theme {
    match durable.get(key) {
        Ok(Some(raw)) => Theme::parse(raw.trim()).unwrap_or_default(),
        Ok(None) => Theme::default(),
        Err(e) => {
            warn!(error = %e, key, "Could not read persisted theme, using light");
            Theme::default()
        }
    }
}
