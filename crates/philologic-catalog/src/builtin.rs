//! The catalog shipped with the application.

use async_trait::async_trait;
use philologic_common::{LearningModule, PhilosopherRecord};

use crate::source::{CatalogError, CatalogSource};

#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    philosophers: Vec<PhilosopherRecord>,
    modules: Vec<LearningModule>,
}

fn philosopher(id: i64, name: &str, work: &str, description: &str, framework: &str) -> PhilosopherRecord {
    PhilosopherRecord {
        id,
        name: name.to_string(),
        work_title: work.to_string(),
        description: description.to_string(),
        reasoning_framework: framework.to_string(),
    }
}

fn module(id: i64, philosopher_id: i64, title: &str, content: &str, difficulty_level: u8, is_premium: bool) -> LearningModule {
    LearningModule {
        id,
        philosopher_id,
        title: title.to_string(),
        content: content.to_string(),
        difficulty_level,
        is_premium,
    }
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        let philosophers = vec![
            philosopher(1, "Carl Jung", "Analytical Psychology",
                "Explore the depths of the psyche through analytical psychology and discover the collective unconscious.",
                "Introspective analysis using archetypes and the collective unconscious"),
            philosopher(2, "Plato", "Allegory of the Cave",
                "Journey from shadows to enlightenment through dialectical reasoning and discover eternal truths.",
                "Dialectical questioning to discover eternal forms and truth"),
            philosopher(3, "Friedrich Nietzsche", "Genealogy of Morals",
                "Deconstruct moral values through genealogical analysis and question everything you believe.",
                "Critical deconstruction of assumed values and perspectives"),
            philosopher(4, "Immanuel Kant", "Moral Theory",
                "Develop systematic moral reasoning through categorical imperatives and practical reason.",
                "Systematic deduction using practical reason and moral law"),
        ];

        let modules = vec![
            module(1, 1, "Archetypes", "Recurring images and patterns that structure human experience across cultures.", 1, false),
            module(2, 1, "The Shadow", "The unacknowledged side of the personality and how projection reveals it.", 2, false),
            module(3, 1, "Individuation", "Integrating conscious and unconscious contents into a whole self.", 3, true),
            module(4, 2, "The Cave", "Prisoners mistake shadows for reality until one turns toward the fire and the sun.", 1, false),
            module(5, 2, "Theory of Forms", "Particular things participate in unchanging, perfect Forms known by reason.", 2, false),
            module(6, 2, "The Dialectic", "Advancing from opinion to knowledge through question, answer, and refutation.", 3, true),
            module(7, 3, "Master and Slave Morality", "How valuations of good and bad became good and evil.", 1, false),
            module(8, 3, "Guilt and Bad Conscience", "The debtor-creditor relation as the origin of moral obligation.", 2, false),
            module(9, 3, "The Ascetic Ideal", "Why humanity would rather will nothingness than not will.", 3, true),
            module(10, 4, "The Categorical Imperative", "Act only on maxims you could will to become universal law.", 1, false),
            module(11, 4, "Duty and Good Will", "Moral worth lies in acting from duty, not inclination.", 2, false),
            module(12, 4, "Autonomy", "Rational agents give the moral law to themselves.", 3, true),
        ];

        Self { philosophers, modules }
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    async fn philosophers(&self) -> Result<Vec<PhilosopherRecord>, CatalogError> {
        Ok(self.philosophers.clone())
    }

    async fn modules(&self, philosopher_id: i64) -> Result<Vec<LearningModule>, CatalogError> {
        if !self.philosophers.iter().any(|p| p.id == philosopher_id) {
            return Err(CatalogError::NotFound(philosopher_id));
        }
        Ok(self.modules
            .iter()
            .filter(|m| m.philosopher_id == philosopher_id)
            .cloned()
            .collect())
    }

    fn describe(&self) -> String { "builtin".to_string() }
}
