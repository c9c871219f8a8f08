//! Cloud Run service to GitHub repository mapping
//!
//! The table is compiled in and never reloaded. Several services (production
//! and staging variants) share one repository, so the table is not injective.

use std::collections::HashMap;

/// GitHub organization that owns every mapped repository
pub const GITHUB_ORG: &str = "mbrt26";

/// Project name reported in `meta.json`
pub const PROJECT_NAME: &str = "appsindunnova";

const SERVICE_TO_REPO: &[(&str, &str)] = &[
    ("arcopack-erp", "Arcopack"),
    ("carnes-sebastian", "carnesdelsebastian"),
    ("carnes-sebastian-staging", "carnesdelsebastian"),
    ("carnesdelsebastian", "carnesdelsebastian"),
    ("carnesdelsebastian-staging", "carnesdelsebastian"),
    ("codeta-crm", "CODETA"),
    ("colsegur", "Colsegur"),
    ("creaciones-apice", "CreacionesApice"),
    ("crm-contenedores", "ObrajeCRM"),
    ("crm-ecourmet", "EcourmetV2"),
    ("crm-gyt", "GYT"),
    ("crm-komsa", "KOMSA"),
    ("formas-futuro", "FormasFuturo"),
    ("fundiciones-medellin", "FundicionesMedellin"),
    ("gestion-proveedores-isa", "GestionProveedoresISA"),
    ("hemisferio-erp", "Hemisferio"),
    ("huella-carbono", "HuellaCarbono"),
    ("jardin-botanico", "JardinBotanico"),
    ("logiempresas", "Logiempresas"),
    ("mentes-estrategicas", "mentes_estrategicas"),
    ("moldes-mecanizados-app", "MoldesyMecanizados"),
    ("mouse-digital", "MouseDigital"),
    ("novapcr-app", "NOVAPCR"),
    ("plasticos-ambientales", "PlasticosAmbientales"),
    ("rgd-aire", "RGDAire"),
    ("seyca", "seyca_produccion"),
    ("seyca-produccion", "seyca_produccion"),
    ("tersasoft", "tersaSoft"),
    ("vid-comunicaciones", "VID"),
];

/// Immutable service → repository table plus the owning organization
#[derive(Debug, Clone)]
pub struct MappingTable {
    org: String,
    entries: Vec<(String, String)>,
}

impl MappingTable {
    /// Build a table from ordered `(service, repo)` pairs.
    ///
    /// Order matters: [`MappingTable::inverse`] keeps the last service
    /// seen for each repository.
    pub fn new<I, S, R>(org: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, R)>,
        S: Into<String>,
        R: Into<String>,
    {
        Self {
            org: org.into(),
            entries: entries
                .into_iter()
                .map(|(s, r)| (s.into(), r.into()))
                .collect(),
        }
    }

    /// The compiled-in production table
    pub fn builtin() -> Self {
        Self::new(GITHUB_ORG, SERVICE_TO_REPO.iter().copied())
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Repository name for a Cloud Run service
    pub fn repo_for(&self, service: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| s == service)
            .map(|(_, r)| r.as_str())
    }

    /// `https://github.com/{org}/{repo}`
    pub fn repo_url(&self, repo: &str) -> String {
        format!("https://github.com/{}/{}", self.org, repo)
    }

    /// Repository → service lookup. Last writer wins for shared repositories.
    pub fn inverse(&self) -> HashMap<&str, &str> {
        let mut inverse = HashMap::with_capacity(self.entries.len());
        for (service, repo) in &self.entries {
            inverse.insert(repo.as_str(), service.as_str());
        }
        inverse
    }

    /// Every service mapped to `repo`, in table order
    pub fn services_for(&self, repo: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, r)| r == repo)
            .map(|(s, _)| s.as_str())
            .collect()
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::builtin()
    }
}
