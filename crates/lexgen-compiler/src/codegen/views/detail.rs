//! Detail view of the primary record type.

use crate::codegen::paths::{import_path, API, DETAIL_VIEW, STORE, TYPES, UI_COMPONENTS};
use crate::codegen::ts_types::{js_str, prop_access};
use crate::model::{Field, FieldType, RecordType};
use crate::naming::RecordNames;

/// Generates services/views/DetailView.ts.
///
/// Every field of the record is shown, styled by type: media preview, tag
/// list, yes/no, or plain text. Delete asks for confirmation, then refetches
/// the list into the store.
pub fn generate_detail_view_ts(record: &RecordType, names: &RecordNames) -> String {
    let mut field_display = String::new();
    for field in &record.fields {
        field_display.push_str(&detail_field_display(field));
    }

    format!(
        r#"/**
 * Detail View - displays a single {pascal} record
 */

import {{ {data} }} from '{types}';
import {{ {delete}, {list} }} from '{api}';
import {{ storeManager }} from '{store}';
import {{ createButton, clearContainer, createMediaPreview, createTagsDisplay }} from '{components}';

interface DetailViewCallbacks {{
  onBack: () => void;
  onEdit: () => void;
  onDelete: () => void;
}}

function fieldGroup(label: string, content: HTMLElement): HTMLElement {{
  const group = document.createElement('div');
  group.className = 'field-group';
  const labelEl = document.createElement('div');
  labelEl.className = 'field-label';
  labelEl.textContent = label;
  group.appendChild(labelEl);
  group.appendChild(content);
  return group;
}}

function fieldValue(text: string): HTMLElement {{
  const value = document.createElement('div');
  value.className = 'field-value';
  value.textContent = text;
  return value;
}}

export function renderDetailView(
  container: HTMLElement,
  item: {data},
  callbacks: DetailViewCallbacks
): void {{
  clearContainer(container);

  const header = document.createElement('h2');
  header.textContent = '{pascal} Details';
  container.appendChild(header);

  const detailContainer = document.createElement('div');
  detailContainer.className = 'detail-container';
{field_display}
  container.appendChild(detailContainer);

  const buttonGroup = document.createElement('div');
  buttonGroup.className = 'button-group';
  buttonGroup.appendChild(createButton('Edit', 'primary', callbacks.onEdit));
  buttonGroup.appendChild(createButton('Delete', 'danger', async () => {{
    if (confirm({confirm})) {{
      try {{
        await {delete}(item.uri);
        const response = await {list}();
        storeManager.{setter}(response.{key});
        callbacks.onDelete();
      }} catch (error) {{
        alert('Failed to delete: ' + (error instanceof Error ? error.message : 'Unknown error'));
      }}
    }}
  }}));
  buttonGroup.appendChild(createButton('Back', 'secondary', callbacks.onBack));
  container.appendChild(buttonGroup);
}}
"#,
        pascal = names.pascal,
        data = names.data_type(),
        delete = names.delete_fn(),
        list = names.list_fn(),
        setter = names.setter_fn(),
        key = names.collection_key(),
        types = import_path(DETAIL_VIEW, TYPES),
        api = import_path(DETAIL_VIEW, API),
        store = import_path(DETAIL_VIEW, STORE),
        components = import_path(DETAIL_VIEW, UI_COMPONENTS),
        confirm = js_str(&format!("Are you sure you want to delete this {}?", record.name)),
        field_display = field_display,
    )
}

fn detail_field_display(field: &Field) -> String {
    let value = prop_access("item", &field.name);
    let label = js_str(&field.name);

    match field.typ {
        FieldType::MediaReference => {
            let media = field.media_type.map(|m| m.as_str()).unwrap_or("image");
            format!(
                "\n  if ({value}) {{\n    detailContainer.appendChild(fieldGroup({label}, createMediaPreview({value}, '{media}')));\n  }}\n",
                value = value,
                label = label,
                media = media,
            )
        }
        FieldType::StringArray | FieldType::NumberArray => format!(
            "\n  if ({value} && {value}.length > 0) {{\n    detailContainer.appendChild(fieldGroup({label}, createTagsDisplay({value}.map(String))));\n  }}\n",
            value = value,
            label = label,
        ),
        FieldType::Boolean => format!(
            "\n  detailContainer.appendChild(fieldGroup({label}, fieldValue({value} ? 'Yes' : 'No')));\n",
            value = value,
            label = label,
        ),
        _ => format!(
            "\n  if ({value}) {{\n    detailContainer.appendChild(fieldGroup({label}, fieldValue(String({value}))));\n  }}\n",
            value = value,
            label = label,
        ),
    }
}
