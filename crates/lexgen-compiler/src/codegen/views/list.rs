//! List view of the primary record type.

use crate::codegen::paths::{import_path, LIST_VIEW, TYPES, UI_COMPONENTS};
use crate::codegen::ts_types::{js_str, local_ident, prop_access};
use crate::model::{Field, FieldType, RecordType};
use crate::naming::RecordNames;

/// Array values shown per list item before the overflow badge.
const MAX_LIST_TAGS: usize = 3;

/// Generates services/views/ListView.ts showing `display_fields` per item.
pub fn generate_list_view_ts(record: &RecordType, names: &RecordNames, display_fields: &[&Field]) -> String {
    let mut field_display = String::new();
    for field in display_fields {
        field_display.push_str(&list_field_display(field));
    }

    format!(
        r#"/**
 * List View - displays all {pascal} records
 */

import {{ {data} }} from '{types}';
import {{ createButton, clearContainer }} from '{components}';

interface ListViewCallbacks {{
  onItemClick: (uri: string) => void;
  onBack: () => void;
  onCreate: () => void;
}}

export function renderListView(
  container: HTMLElement,
  items: {data}[],
  callbacks: ListViewCallbacks
): void {{
  clearContainer(container);

  const header = document.createElement('h2');
  header.textContent = 'All {pascal}s';
  container.appendChild(header);

  if (items.length === 0) {{
    const noData = document.createElement('p');
    noData.className = 'no-data';
    noData.textContent = {empty};
    container.appendChild(noData);
  }} else {{
    const listContainer = document.createElement('div');
    listContainer.className = 'list-container';

    items.forEach((item) => {{
      const listItem = document.createElement('div');
      listItem.className = 'list-item';
      listItem.addEventListener('click', () => callbacks.onItemClick(item.uri));
{field_display}
      listContainer.appendChild(listItem);
    }});

    container.appendChild(listContainer);
  }}

  const buttonGroup = document.createElement('div');
  buttonGroup.className = 'button-group';
  buttonGroup.appendChild(createButton('Create New', 'primary', callbacks.onCreate));
  buttonGroup.appendChild(createButton('Back', 'secondary', callbacks.onBack));
  container.appendChild(buttonGroup);
}}
"#,
        pascal = names.pascal,
        data = names.data_type(),
        types = import_path(LIST_VIEW, TYPES),
        components = import_path(LIST_VIEW, UI_COMPONENTS),
        empty = js_str(&format!("No {}s yet. Create your first one!", record.name)),
        field_display = field_display,
    )
}

fn list_field_display(field: &Field) -> String {
    let value = prop_access("item", &field.name);
    let local = local_ident(&field.name);

    match field.typ {
        FieldType::StringArray | FieldType::NumberArray => format!(
            r#"
      if ({value} && {value}.length > 0) {{
        const {local}Tags = document.createElement('div');
        {local}Tags.className = 'tags-container';
        {value}.slice(0, {max}).forEach((val) => {{
          const tag = document.createElement('span');
          tag.className = 'tag';
          tag.textContent = String(val);
          {local}Tags.appendChild(tag);
        }});
        if ({value}.length > {max}) {{
          const more = document.createElement('span');
          more.className = 'tag';
          more.textContent = '+' + ({value}.length - {max}) + ' more';
          {local}Tags.appendChild(more);
        }}
        listItem.appendChild({local}Tags);
      }}
"#,
            value = value,
            local = local,
            max = MAX_LIST_TAGS,
        ),
        FieldType::Boolean => format!(
            r#"
      {{
        const {local}P = document.createElement('p');
        {local}P.textContent = {value} ? {yes} : {no};
        listItem.appendChild({local}P);
      }}
"#,
            local = local,
            value = value,
            yes = js_str(&format!("{}: Yes", field.name)),
            no = js_str(&format!("{}: No", field.name)),
        ),
        _ => format!(
            r#"
      if ({value}) {{
        const {local}P = document.createElement('p');
        {local}P.textContent = String({value});
        listItem.appendChild({local}P);
      }}
"#,
            value = value,
            local = local,
        ),
    }
}
