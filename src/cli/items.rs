use crate::cli::ItemCommands;
use crate::client::ApiClient;
use crate::types::dto::items::{CreateItemRequest, Item, PaginatedItems, UpdateItemRequest};

/// Run one item command against the API and render its result
///
/// # Returns
/// * `Ok(String)` - Text to print
/// * `Err(String)` - The client's error message
pub async fn run(client: &ApiClient, command: ItemCommands) -> Result<String, String> {
    match command {
        ItemCommands::List { page, size } => {
            let page = client.list_items(page, size).await.into_result()?;
            Ok(render_page(&page))
        }
        ItemCommands::Get { id } => {
            let item = client.get_item(id).await.into_result()?;
            Ok(render_item(&item))
        }
        ItemCommands::Create { name, description } => {
            let request = CreateItemRequest { name, description };
            let item = client.create_item(&request).await.into_result()?;
            Ok(format!("Created item {}\n{}", item.id, render_item(&item)))
        }
        ItemCommands::Update {
            id,
            name,
            description,
            clear_description,
        } => {
            let request = UpdateItemRequest {
                name,
                description: if clear_description {
                    Some(None)
                } else {
                    description.map(Some)
                },
            };
            let item = client.update_item(id, &request).await.into_result()?;
            Ok(format!("Updated item {}\n{}", item.id, render_item(&item)))
        }
        ItemCommands::Delete { id } => {
            client.delete_item(id).await.into_result()?;
            Ok(format!("Deleted item {}", id))
        }
    }
}

/// Render a single item as `key: value` lines
pub fn render_item(item: &Item) -> String {
    format!(
        "id:          {}\nname:        {}\ndescription: {}\ncreated_at:  {}\nupdated_at:  {}",
        item.id,
        item.name,
        item.description.as_deref().unwrap_or("-"),
        item.created_at,
        item.updated_at,
    )
}

/// Render a page of items as an aligned table with a footer
pub fn render_page(page: &PaginatedItems) -> String {
    let footer = format!(
        "page {} of {} ({} items total)",
        page.page, page.pages, page.total
    );
    if page.items.is_empty() {
        return format!("No items\n{}", footer);
    }

    let rows: Vec<[String; 4]> = page
        .items
        .iter()
        .map(|item| {
            [
                item.id.to_string(),
                item.name.clone(),
                item.description.clone().unwrap_or_else(|| "-".to_string()),
                item.updated_at.clone(),
            ]
        })
        .collect();

    let headers = ["ID", "NAME", "DESCRIPTION", "UPDATED"];
    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(&headers.map(str::to_string), &widths));
    for row in &rows {
        lines.push(render_row(row, &widths));
    }
    lines.push(footer);
    lines.join("\n")
}

fn render_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
