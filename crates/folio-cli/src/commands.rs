// SPDX-License-Identifier: Apache-2.0

use crate::client::{ApiClient, CliError};
use crate::flow::SubmitFlow;
use folio_api::{SkillDto, SkillPayloadDto};
use folio_model::fallback_skills;
use serde_json::json;
use std::path::Path;
use tracing::warn;

fn print_skill_rows(rows: &[SkillDto], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string())
        );
        return;
    }
    for skill in rows {
        println!(
            "{:>4}  {}  {:<24} {}",
            skill.id,
            skill.logo,
            skill.name,
            skill.category.label()
        );
    }
}

pub async fn list_admin(client: &ApiClient, json: bool) -> Result<(), CliError> {
    let rows = client.list_admin().await?;
    print_skill_rows(&rows, json);
    Ok(())
}

/// Which source the public display renders.
#[derive(Debug, PartialEq, Eq)]
pub enum Listing {
    Live(Vec<SkillDto>),
    Fallback,
}

/// The marketing-page rule: a failed call or an empty result both fall
/// back to the built-in list, so the display always has content.
#[must_use]
pub fn select_listing(fetched: Result<Vec<SkillDto>, CliError>) -> Listing {
    match fetched {
        Ok(rows) if !rows.is_empty() => Listing::Live(rows),
        Ok(_) => Listing::Fallback,
        Err(e) => {
            warn!("public listing unavailable, using fallback: {e}");
            Listing::Fallback
        }
    }
}

pub async fn show_public(client: &ApiClient, json: bool) -> Result<(), CliError> {
    match select_listing(client.list_public().await) {
        Listing::Live(rows) => print_skill_rows(&rows, json),
        Listing::Fallback => print_fallback(json),
    }
    Ok(())
}

fn print_fallback(json: bool) {
    let entries = fallback_skills();
    if json {
        let rows: Vec<_> = entries
            .iter()
            .map(|s| json!({"name": s.name, "logo": s.logo, "category": s.category.as_str()}))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
        );
        return;
    }
    for skill in entries {
        println!("      {}  {:<24} {}", skill.logo, skill.name, skill.category.label());
    }
}

/// The original form submit: when a logo file is given, upload first
/// and substitute the returned URL into the payload before the write.
async fn resolve_logo(
    client: &ApiClient,
    payload: &mut SkillPayloadDto,
    logo_file: Option<&Path>,
) -> Result<(), CliError> {
    if let Some(path) = logo_file {
        let uploaded = client.upload(path).await?;
        payload.logo = Some(uploaded.url);
        payload.logo_type = Some("upload".to_string());
    }
    Ok(())
}

pub async fn create_skill(
    client: &ApiClient,
    mut payload: SkillPayloadDto,
    logo_file: Option<&Path>,
    json: bool,
) -> Result<(), CliError> {
    let mut flow = SubmitFlow::new();
    flow.begin().map_err(|e| CliError::Usage(e.to_string()))?;
    let outcome = async {
        resolve_logo(client, &mut payload, logo_file).await?;
        client.create(&payload).await
    }
    .await;
    report_outcome(&mut flow, outcome, "Skill created successfully", json)
}

pub async fn update_skill(
    client: &ApiClient,
    id: i64,
    mut payload: SkillPayloadDto,
    logo_file: Option<&Path>,
    json: bool,
) -> Result<(), CliError> {
    let mut flow = SubmitFlow::new();
    flow.begin().map_err(|e| CliError::Usage(e.to_string()))?;
    let outcome = async {
        resolve_logo(client, &mut payload, logo_file).await?;
        client.update(id, &payload).await
    }
    .await;
    report_outcome(&mut flow, outcome, "Skill updated successfully", json)
}

pub async fn delete_skill(client: &ApiClient, id: i64, json: bool) -> Result<(), CliError> {
    let message = client.delete(id).await?;
    if json {
        println!(
            "{}",
            serde_json::to_string(&message).unwrap_or_default()
        );
    } else {
        println!("{}", message.message);
    }
    Ok(())
}

pub async fn upload_file(client: &ApiClient, path: &Path, json: bool) -> Result<(), CliError> {
    let uploaded = client.upload(path).await?;
    if json {
        println!(
            "{}",
            serde_json::to_string(&uploaded).unwrap_or_default()
        );
    } else {
        println!("{}", uploaded.url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{LogoType, SkillCategory};

    fn dto(id: i64, name: &str) -> SkillDto {
        SkillDto {
            id,
            name: name.to_string(),
            category: SkillCategory::Frontend,
            logo: "⚛️".to_string(),
            logo_type: LogoType::Emoji,
            created_at: 1,
            updated_at: 1,
        }
    }

    #[test]
    fn live_rows_are_rendered_as_is() {
        let rows = vec![dto(1, "React")];
        assert_eq!(select_listing(Ok(rows.clone())), Listing::Live(rows));
    }

    #[test]
    fn empty_result_falls_back_to_the_builtin_list() {
        assert_eq!(select_listing(Ok(Vec::new())), Listing::Fallback);
    }

    #[test]
    fn failed_call_falls_back_to_the_builtin_list() {
        let err = CliError::Api {
            status: 500,
            message: "Failed to fetch skills".to_string(),
        };
        assert_eq!(select_listing(Err(err)), Listing::Fallback);
    }
}

fn report_outcome(
    flow: &mut SubmitFlow,
    outcome: Result<SkillDto, CliError>,
    success_banner: &str,
    json: bool,
) -> Result<(), CliError> {
    match outcome {
        Ok(skill) => {
            let _ = flow.finish(Ok(success_banner.to_string()));
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&skill).unwrap_or_default()
                );
            } else if let Some(banner) = flow.banner() {
                println!("{banner}: {} (id={})", skill.name, skill.id);
            }
            let _ = flow.clear_banner();
            Ok(())
        }
        Err(e) => {
            let _ = flow.finish(Err(e.to_string()));
            Err(e)
        }
    }
}
