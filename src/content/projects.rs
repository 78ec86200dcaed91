//! Project case studies, authored once per locale.
//!
//! The two lists are written independently. Entries line up by position
//! across locales, not by a shared id.

use crate::i18n::Locale;

#[derive(Debug, Clone)]
pub struct Project {
    pub name: &'static str,
    pub context: &'static str,
    pub architecture: &'static str,
    pub choices: &'static str,
    pub constraints: &'static str,
    pub results: &'static str,
}

// ==================== French Projects ====================

pub const FRENCH_PROJECTS: &[Project] = &[
    Project {
        name: "IA Training – Deep Learning Foundations",
        context: "Projet personnel structuré comme un parcours progressif pour maîtriser les fondements mathématiques et techniques du machine learning puis du deep learning, en privilégiant la compréhension des mécanismes internes.",
        architecture: "Bases mathématiques (dérivées, gradients, règle de la chaîne) puis régression linéaire et logistique from scratch en NumPy, réseau fully connected et CNN en PyTorch, premières expérimentations NLP.",
        choices: "Implémentations manuelles avant les abstractions des librairies ; visualisation systématique des courbes de coût avec Matplotlib ; SGD puis Adam, régularisation et early stopping.",
        constraints: "Progression volontairement séquentielle : chaque étape doit être comprise et reproduite avant de passer à la suivante.",
        results: "Maîtrise opérationnelle de l'optimisation et de la backpropagation, capacité à entraîner des MLP et CNN, et bases solides pour évoluer vers des architectures plus avancées.",
    },
    Project {
        name: "Extension IA – Analyse des builds échoués",
        context: "Module d'assistance LLM intégré pour diagnostiquer rapidement les échecs de build TeamCity.",
        architecture: "Collecte des logs via l'API TeamCity, structuration du contexte, envoi au LLM, puis résumé technique, cause probable, classification et suggestion de correction.",
        choices: "Pré-filtrage des logs avant l'appel au modèle pour réduire le contexte ; sortie structurée par catégorie (compilation, test, dépendance).",
        constraints: "Logs volumineux et bruités ; l'outil doit rester utile sans accès au code source du projet analysé.",
        results: "Diagnostic accéléré et base technique généralisable à d'autres CI/CD (GitHub Actions, GitLab CI, Jenkins).",
    },
    Project {
        name: "Ourtiguet Naturel – Laboratoire intelligent d'huiles essentielles",
        context: "Projet de formation pour un laboratoire interne où l'IA assiste la création des recettes et le contrôle des dosages.",
        architecture: "Frontend React, backend Django, intégration OpenAI avec RAG et base vectorielle, CI/CD avec runner GitHub sur serveur local, stack Docker, Redis et Nginx.",
        choices: "RAG plutôt que fine-tuning pour garder les recettes internes hors du modèle ; sauvegardes chiffrées automatisées via scripts Python.",
        constraints: "Données confidentielles hébergées en interne ; déploiement sur un seul serveur local.",
        results: "Assistant métier opérationnel en environnement interne, couvrant tout le cycle développement, IA et déploiement.",
    },
];

// ==================== English Projects ====================

pub const ENGLISH_PROJECTS: &[Project] = &[
    Project {
        name: "IA Training – Deep Learning Foundations",
        context: "Personal project built as a progressive learning path to master machine learning and deep learning foundations through an internal understanding of model behavior.",
        architecture: "Math fundamentals and gradient descent, then NumPy implementations of linear and logistic regression, PyTorch MLP and CNN models, and first NLP experiments.",
        choices: "Manual implementations before library abstractions; loss curves visualized at every step with Matplotlib; SGD then Adam, with regularization and early stopping.",
        constraints: "Deliberately sequential progression: each step must be understood and reproduced before moving on.",
        results: "Strong grasp of optimization and backpropagation, practical MLP and CNN training, and the groundwork for more advanced architectures.",
    },
    Project {
        name: "AI Extension – Failed Build Analysis",
        context: "LLM-powered assistant module to diagnose TeamCity build failures faster.",
        architecture: "Collect logs from the TeamCity API, structure the context, send it to the LLM, then produce a technical summary, probable root cause, error category and fix suggestions.",
        choices: "Logs are pre-filtered before the model call to shrink the context; output is structured by category (compilation, test, dependency).",
        constraints: "Large, noisy logs; the tool must stay useful without access to the analyzed project's source code.",
        results: "Faster troubleshooting with an architecture reusable across CI/CD ecosystems such as GitHub Actions, GitLab CI and Jenkins.",
    },
    Project {
        name: "Ourtiguet Naturel – Intelligent Essential Oils Lab",
        context: "Training project where AI assists recipe creation and dosage control for an internal lab.",
        architecture: "React frontend, Django backend, OpenAI with RAG and a vector database, CI/CD on a local GitHub runner, Docker stack with Redis and Nginx.",
        choices: "RAG rather than fine-tuning to keep internal recipes out of the model; automated encrypted backups through Python scripts.",
        constraints: "Confidential data hosted in-house; deployment on a single local server.",
        results: "Operational internal assistant covering the full development, AI and deployment lifecycle.",
    },
];

/// Project list for a locale.
pub fn projects(locale: Locale) -> &'static [Project] {
    match locale {
        Locale::Fr => FRENCH_PROJECTS,
        Locale::En => ENGLISH_PROJECTS,
    }
}
