//! Entry submission: resolve every selected parent against collections
//! loaded once per submission, embed the display names, write through the
//! repository. Also the cascading selection options that feed the entry
//! form's dependent dropdowns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::Stored;
use crate::error::Result;
use crate::models::{AgeBracket, Category, Entry, Modality, Skater, Team};
use crate::repository::Repository;
use crate::services::denormalize::{resolve_display, resolve_required};
use crate::services::filter_chain::{FilterChain, filter_candidates};
use crate::store::DocumentStore;

/// The five parent ids selected on the entry form.
#[derive(Debug, Clone)]
pub struct EntrySelection {
    pub team_id: String,
    pub skater_id: String,
    pub modality_id: String,
    pub category_id: String,
    pub age_bracket_id: String,
}

/// Parent collections loaded wholesale, once per form session. Bounded to
/// collections small enough to hold in memory; pagination is out of scope.
pub struct EntryParents {
    pub teams: Vec<Stored<Team>>,
    pub skaters: Vec<Stored<Skater>>,
    pub modalities: Vec<Stored<Modality>>,
    pub categories: Vec<Stored<Category>>,
    pub age_brackets: Vec<Stored<AgeBracket>>,
}

impl EntryParents {
    pub async fn load(store: &dyn DocumentStore) -> Result<Self> {
        Ok(Self {
            teams: Repository::<Team>::new(store).list_active().await?,
            skaters: Repository::<Skater>::new(store).list_active().await?,
            modalities: Repository::<Modality>::new(store).list_active().await?,
            categories: Repository::<Category>::new(store).list_active().await?,
            age_brackets: Repository::<AgeBracket>::new(store).list_active().await?,
        })
    }
}

/// Build the denormalized entry document. Skater, modality, category and
/// age bracket are required references; the team display name is the
/// secondary slot that degrades to an empty string when unresolvable.
/// No partial entry is ever produced: a missing required reference aborts
/// before anything is written.
pub fn build_entry(
    selection: &EntrySelection,
    parents: &EntryParents,
    actor: &str,
    now: DateTime<Utc>,
) -> Result<Entry> {
    let skater = resolve_required(&selection.skater_id, &parents.skaters, "skater")?;
    let modality = resolve_required(&selection.modality_id, &parents.modalities, "modality")?;
    let category = resolve_required(&selection.category_id, &parents.categories, "category")?;
    let bracket = resolve_required(&selection.age_bracket_id, &parents.age_brackets, "age bracket")?;
    let team_name = resolve_display(Some(&selection.team_id), &parents.teams, |team: &Team| {
        &team.name
    });

    Ok(Entry {
        team_id: selection.team_id.clone(),
        team_name,
        skater_id: selection.skater_id.clone(),
        skater_name: skater.full_name.clone(),
        modality_id: selection.modality_id.clone(),
        modality_name: modality.name.clone(),
        category_id: selection.category_id.clone(),
        category_name: category.name.clone(),
        age_bracket_id: selection.age_bracket_id.clone(),
        age_bracket_label: bracket.label.clone(),
        created_at: now,
        created_by: actor.to_string(),
        updated_at: None,
        updated_by: None,
    })
}

pub async fn create_entry(
    store: &dyn DocumentStore,
    selection: &EntrySelection,
    actor: &str,
) -> Result<Stored<Entry>> {
    let parents = EntryParents::load(store).await?;
    let entry = build_entry(selection, &parents, actor, Utc::now())?;
    Repository::<Entry>::new(store).create(&entry).await
}

/// Updating re-runs the same resolution against the current parent
/// collections, refreshing every denormalized copy as of the update.
pub async fn update_entry(
    store: &dyn DocumentStore,
    id: &str,
    selection: &EntrySelection,
    actor: &str,
) -> Result<Stored<Entry>> {
    let repo = Repository::<Entry>::new(store);
    let existing = repo.get(id).await?;

    let parents = EntryParents::load(store).await?;
    let mut entry = build_entry(selection, &parents, &existing.record.created_by, Utc::now())?;
    entry.created_at = existing.record.created_at;
    entry.updated_at = Some(Utc::now());
    entry.updated_by = Some(actor.to_string());

    repo.update(id, &entry).await
}

/// Upstream selections driving the dependent dropdowns.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SelectionState {
    pub team: Option<String>,
    pub modality: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OptionItem {
    pub id: String,
    pub label: String,
}

/// Candidate lists for the dependent slots of the entry form.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SelectionOptions {
    pub skaters: Vec<OptionItem>,
    pub categories: Vec<OptionItem>,
    pub age_brackets: Vec<OptionItem>,
}

/// Compute the filtered candidate lists for the current upstream
/// selections. A selected category that falls outside the set implied by
/// the selected modality is dropped, never passed through.
pub fn selection_options(parents: &EntryParents, state: &SelectionState) -> SelectionOptions {
    let mut team_chain = FilterChain::new(&["team", "skater"]);
    team_chain.select(0, state.team.clone());
    let skaters = filter_candidates(&parents.skaters, team_chain.selection(0), |s: &Skater| {
        &s.team_id
    });

    let mut modality_chain = FilterChain::new(&["modality", "category", "age_bracket"]);
    modality_chain.select(0, state.modality.clone());

    // The category list under a selected modality is keyed by the
    // modality's category reference, not by the modality id itself.
    let categories: Vec<&Stored<Category>> = match modality_chain.selection(0) {
        Some(modality_id) => match parents.modalities.iter().find(|m| m.id == modality_id) {
            Some(modality) => parents
                .categories
                .iter()
                .filter(|c| c.id == modality.record.category_id)
                .collect(),
            None => Vec::new(),
        },
        None => parents.categories.iter().collect(),
    };

    if let Some(category) = &state.category {
        modality_chain.select(1, Some(category.clone()));
        let candidate_ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        modality_chain.retain_if_candidate(1, &candidate_ids);
    }

    let age_brackets = filter_candidates(
        &parents.age_brackets,
        modality_chain.selection(1),
        |b: &AgeBracket| &b.category_id,
    );

    SelectionOptions {
        skaters: skaters
            .into_iter()
            .map(|s| OptionItem {
                id: s.id.clone(),
                label: s.record.full_name.clone(),
            })
            .collect(),
        categories: categories
            .into_iter()
            .map(|c| OptionItem {
                id: c.id.clone(),
                label: c.record.name.clone(),
            })
            .collect(),
        age_brackets: age_brackets
            .into_iter()
            .map(|b| OptionItem {
                id: b.id.clone(),
                label: b.record.label.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    fn team(id: &str, name: &str) -> Stored<Team> {
        Stored {
            id: id.to_string(),
            record: Team {
                name: name.to_string(),
                code: "AAA".to_string(),
                responsible: "Ana".to_string(),
                email: "ana@fed.org".to_string(),
                phone: "81999990000".to_string(),
                city: "Recife".to_string(),
                state: "PE".to_string(),
                notes: None,
                created_at: Utc::now(),
                created_by: "system".to_string(),
                updated_at: None,
                updated_by: None,
            },
        }
    }

    fn skater(id: &str, name: &str, team_id: &str) -> Stored<Skater> {
        Stored {
            id: id.to_string(),
            record: Skater {
                full_name: name.to_string(),
                national_id: "111.222.333-44".to_string(),
                birth_date: chrono::NaiveDate::from_ymd_opt(2014, 5, 1).unwrap(),
                age: 11,
                team_id: team_id.to_string(),
                medical_exam_url: None,
                id_document_url: None,
                created_at: Utc::now(),
                created_by: "system".to_string(),
                updated_at: None,
                updated_by: None,
            },
        }
    }

    fn category(id: &str, name: &str) -> Stored<Category> {
        Stored {
            id: id.to_string(),
            record: Category {
                name: name.to_string(),
                code: "INT".to_string(),
                description: None,
                ordering: 1,
                active: true,
                created_at: Utc::now(),
                created_by: "system".to_string(),
                updated_at: None,
                updated_by: None,
            },
        }
    }

    fn modality(id: &str, name: &str, category_id: &str) -> Stored<Modality> {
        Stored {
            id: id.to_string(),
            record: Modality {
                name: name.to_string(),
                style_code: "LI".to_string(),
                sub_style_code: "A".to_string(),
                code: "INT-LI-A".to_string(),
                category_id: category_id.to_string(),
                category_name: "Intermediário".to_string(),
                min_age: 9,
                max_age: 12,
                min_duration: "02:00".to_string(),
                max_duration: "02:30".to_string(),
                active: true,
                created_at: Utc::now(),
                created_by: "system".to_string(),
                updated_at: None,
                updated_by: None,
            },
        }
    }

    fn bracket(id: &str, label: &str, category_id: &str) -> Stored<AgeBracket> {
        Stored {
            id: id.to_string(),
            record: AgeBracket {
                code: "B10".to_string(),
                label: label.to_string(),
                category_id: category_id.to_string(),
                created_at: Utc::now(),
                created_by: "system".to_string(),
                updated_at: None,
                updated_by: None,
            },
        }
    }

    fn parents() -> EntryParents {
        EntryParents {
            teams: vec![team("alpha", "Alpha"), team("beta", "Beta")],
            skaters: vec![
                skater("jane", "Jane", "alpha"),
                skater("bob", "Bob", "beta"),
            ],
            modalities: vec![modality("mod-1", "Livre Individual", "cat-int")],
            categories: vec![
                category("cat-int", "Intermediário"),
                category("cat-juv", "Juvenil"),
            ],
            age_brackets: vec![
                bracket("bra-10", "10 a 11 anos", "cat-int"),
                bracket("bra-12", "12 a 13 anos", "cat-juv"),
            ],
        }
    }

    fn selection() -> EntrySelection {
        EntrySelection {
            team_id: "alpha".to_string(),
            skater_id: "jane".to_string(),
            modality_id: "mod-1".to_string(),
            category_id: "cat-int".to_string(),
            age_bracket_id: "bra-10".to_string(),
        }
    }

    #[test]
    fn entry_embeds_literal_display_names_at_submit_time() {
        let entry = build_entry(&selection(), &parents(), "ana@fed.org", Utc::now()).unwrap();

        assert_eq!(entry.team_name, "Alpha");
        assert_eq!(entry.skater_name, "Jane");
        assert_eq!(entry.modality_name, "Livre Individual");
        assert_eq!(entry.category_name, "Intermediário");
        assert_eq!(entry.age_bracket_label, "10 a 11 anos");
        assert_eq!(entry.created_by, "ana@fed.org");
    }

    #[test]
    fn missing_required_parent_aborts_entry() {
        let mut sel = selection();
        sel.modality_id = "deleted-between-load-and-submit".to_string();

        let err = build_entry(&sel, &parents(), "system", Utc::now()).unwrap_err();
        assert!(matches!(err, StorageError::MissingReference("modality")));
    }

    #[test]
    fn unresolvable_team_degrades_to_empty_name() {
        let mut sel = selection();
        sel.team_id = "gone".to_string();

        let entry = build_entry(&sel, &parents(), "system", Utc::now()).unwrap();
        assert_eq!(entry.team_name, "");
        assert_eq!(entry.team_id, "gone");
    }

    #[test]
    fn team_selection_filters_skater_candidates() {
        let state = SelectionState {
            team: Some("alpha".to_string()),
            ..Default::default()
        };
        let options = selection_options(&parents(), &state);
        assert_eq!(options.skaters.len(), 1);
        assert_eq!(options.skaters[0].label, "Jane");
    }

    #[test]
    fn switching_team_yields_only_new_members() {
        let state = SelectionState {
            team: Some("beta".to_string()),
            ..Default::default()
        };
        let options = selection_options(&parents(), &state);
        assert_eq!(options.skaters.len(), 1);
        assert_eq!(options.skaters[0].label, "Bob");
    }

    #[test]
    fn modality_selection_pins_category_and_brackets() {
        let state = SelectionState {
            modality: Some("mod-1".to_string()),
            category: Some("cat-int".to_string()),
            ..Default::default()
        };
        let options = selection_options(&parents(), &state);
        assert_eq!(options.categories.len(), 1);
        assert_eq!(options.categories[0].label, "Intermediário");
        assert_eq!(options.age_brackets.len(), 1);
        assert_eq!(options.age_brackets[0].label, "10 a 11 anos");
    }

    #[test]
    fn category_outside_modality_filter_is_dropped() {
        let state = SelectionState {
            modality: Some("mod-1".to_string()),
            // Juvenil is not the category the modality references.
            category: Some("cat-juv".to_string()),
            ..Default::default()
        };
        let options = selection_options(&parents(), &state);
        // The invalid downstream selection was cleared, so the bracket
        // list passes through unfiltered rather than following it.
        assert_eq!(options.age_brackets.len(), 2);
    }

    #[test]
    fn no_selection_passes_everything_through() {
        let options = selection_options(&parents(), &SelectionState::default());
        assert_eq!(options.skaters.len(), 2);
        assert_eq!(options.categories.len(), 2);
        assert_eq!(options.age_brackets.len(), 2);
    }
}
