//! Create/edit form of the primary record type.

use std::collections::HashSet;

use crate::codegen::paths::{import_path, API, FORM_VIEW, STORE, TYPES, UI_COMPONENTS};
use crate::codegen::ts_types::{js_str, local_ident, prop_access_opt, prop_key};
use crate::model::{Field, FieldType, RecordType};
use crate::naming::RecordNames;

/// Generates services/views/FormView.ts.
///
/// One control per field: checkbox for booleans, number input for integers,
/// comma-separated input for sequences, text input otherwise. Saving creates
/// or updates depending on whether an item was passed in, then refetches the
/// list into the store.
pub fn generate_form_view_ts(record: &RecordType, names: &RecordNames) -> String {
    let locals = unique_locals(&record.fields);

    let mut form_fields = String::new();
    let mut collect_data = String::new();
    for (field, local) in record.fields.iter().zip(&locals) {
        form_fields.push_str(&form_control(field, local));
        collect_data.push_str(&format!("        {}: {},\n", prop_key(&field.name), collect_value(field, local)));
    }

    format!(
        r#"/**
 * Form View - create/edit {pascal} records
 */

import {{ {data} }} from '{types}';
import {{ {create}, {update}, {list} }} from '{api}';
import {{ storeManager }} from '{store}';
import {{ createButton, clearContainer }} from '{components}';

interface FormViewCallbacks {{
  onSave: () => void;
  onCancel: () => void;
}}

function addLabel(form: HTMLElement, text: string): void {{
  const label = document.createElement('label');
  label.textContent = text;
  form.appendChild(label);
}}

function splitList(value: string): string[] {{
  return value.split(',').map((s) => s.trim()).filter((s) => s);
}}

export function renderFormView(
  container: HTMLElement,
  item: {data} | null,
  callbacks: FormViewCallbacks
): void {{
  clearContainer(container);

  const header = document.createElement('h2');
  header.textContent = item ? 'Edit {pascal}' : 'Create {pascal}';
  container.appendChild(header);

  const form = document.createElement('div');
  form.className = 'form-container';
{form_fields}
  container.appendChild(form);

  const buttonGroup = document.createElement('div');
  buttonGroup.className = 'button-group';

  buttonGroup.appendChild(createButton('Save', 'primary', async () => {{
    try {{
      const data: Record<string, unknown> = {{
{collect_data}      }};
      const payload = data as Omit<{data}, 'uri' | 'cid'>;

      if (item) {{
        await {update}(item.uri, payload);
      }} else {{
        await {create}(payload);
      }}

      const response = await {list}();
      storeManager.{setter}(response.{key});

      callbacks.onSave();
    }} catch (error) {{
      alert('Failed to save: ' + (error instanceof Error ? error.message : 'Unknown error'));
    }}
  }}));

  buttonGroup.appendChild(createButton('Cancel', 'secondary', callbacks.onCancel));
  container.appendChild(buttonGroup);
}}
"#,
        pascal = names.pascal,
        data = names.data_type(),
        create = names.create_fn(),
        update = names.update_fn(),
        list = names.list_fn(),
        setter = names.setter_fn(),
        key = names.collection_key(),
        types = import_path(FORM_VIEW, TYPES),
        api = import_path(FORM_VIEW, API),
        store = import_path(FORM_VIEW, STORE),
        components = import_path(FORM_VIEW, UI_COMPONENTS),
        form_fields = form_fields,
        collect_data = collect_data,
    )
}

/// Per-field local variable prefixes, made distinct when two field names
/// derive the same one.
fn unique_locals(fields: &[Field]) -> Vec<String> {
    let mut seen = HashSet::new();
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let base = local_ident(&field.name);
            if seen.insert(base.clone()) {
                base
            } else {
                let numbered = format!("{}{}", base, i);
                seen.insert(numbered.clone());
                numbered
            }
        })
        .collect()
}

fn form_control(field: &Field, local: &str) -> String {
    let current = prop_access_opt("item", &field.name);
    let input = format!("{}Input", local);
    let required_mark = if field.required { " *" } else { "" };
    let required_attr = if field.required {
        format!("  {}.required = true;\n", input)
    } else {
        String::new()
    };

    match field.typ {
        FieldType::Boolean => format!(
            r#"
  const {local}CheckLabel = document.createElement('label');
  {local}CheckLabel.className = 'checkbox-label';
  const {input} = document.createElement('input');
  {input}.type = 'checkbox';
  {input}.checked = {current} ?? false;
  {local}CheckLabel.appendChild({input});
  {local}CheckLabel.appendChild(document.createTextNode({text}));
  form.appendChild({local}CheckLabel);
"#,
            local = local,
            input = input,
            current = current,
            text = js_str(&format!(" {}", field.name)),
        ),
        FieldType::Integer => format!(
            r#"
  addLabel(form, {label});
  const {input} = document.createElement('input');
  {input}.type = 'number';
  {input}.value = {current}?.toString() ?? '';
{required_attr}  form.appendChild({input});
"#,
            label = js_str(&format!("{}{}", field.name, required_mark)),
            input = input,
            current = current,
            required_attr = required_attr,
        ),
        FieldType::StringArray | FieldType::NumberArray => {
            let (hint, placeholder) = if field.typ == FieldType::StringArray {
                ("comma-separated", "item1, item2, item3")
            } else {
                ("comma-separated numbers", "1, 2, 3")
            };
            format!(
                r#"
  addLabel(form, {label});
  const {input} = document.createElement('input');
  {input}.type = 'text';
  {input}.value = {current}?.join(', ') ?? '';
  {input}.placeholder = '{placeholder}';
  form.appendChild({input});
"#,
                label = js_str(&format!("{}{} ({})", field.name, required_mark, hint)),
                input = input,
                current = current,
                placeholder = placeholder,
            )
        }
        _ => {
            let input_type = if field.format() == Some("datetime") {
                "datetime-local"
            } else {
                "text"
            };
            let placeholder = if field.typ == FieldType::MediaReference {
                let media = field.media_type.map(|m| m.as_str()).unwrap_or("file");
                format!("  {}.placeholder = 'https://example.com/{}';\n", input, media)
            } else {
                String::new()
            };
            format!(
                r#"
  addLabel(form, {label});
  const {input} = document.createElement('input');
  {input}.type = '{input_type}';
  {input}.value = String({current} ?? '');
{placeholder}{required_attr}  form.appendChild({input});
"#,
                label = js_str(&format!("{}{}", field.name, required_mark)),
                input = input,
                input_type = input_type,
                current = current,
                placeholder = placeholder,
                required_attr = required_attr,
            )
        }
    }
}

fn collect_value(field: &Field, local: &str) -> String {
    let input = format!("{}Input", local);
    match field.typ {
        FieldType::Boolean => format!("{}.checked", input),
        FieldType::Integer => format!("parseInt({}.value) || 0", input),
        FieldType::StringArray => format!("splitList({}.value)", input),
        FieldType::NumberArray => format!(
            "splitList({}.value).map((s) => parseInt(s)).filter((n) => !isNaN(n))",
            input
        ),
        _ => format!("{}.value", input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaType;

    fn render(record: &RecordType) -> String {
        let names = RecordNames::new(&record.name, "example.com");
        generate_form_view_ts(record, &names)
    }

    #[test]
    fn test_control_per_field_type() {
        let record = RecordType::new("event")
            .with_field(Field::new("title", FieldType::Text).required())
            .with_field(Field::new("seats", FieldType::Integer))
            .with_field(Field::new("public", FieldType::Boolean))
            .with_field(Field::new("tags", FieldType::StringArray))
            .with_field(Field::new("scores", FieldType::NumberArray));
        let ts = render(&record);

        assert!(ts.contains("titleInput.type = 'text';"));
        assert!(ts.contains("titleInput.required = true;"));
        assert!(ts.contains("addLabel(form, 'title *');"));
        assert!(ts.contains("seatsInput.type = 'number';"));
        assert!(ts.contains("publicInput.type = 'checkbox';"));
        assert!(ts.contains("addLabel(form, 'tags (comma-separated)');"));
        assert!(ts.contains("addLabel(form, 'scores (comma-separated numbers)');"));

        assert!(ts.contains("        title: titleInput.value,\n"));
        assert!(ts.contains("        seats: parseInt(seatsInput.value) || 0,\n"));
        assert!(ts.contains("        public: publicInput.checked,\n"));
        assert!(ts.contains("        tags: splitList(tagsInput.value),\n"));
    }

    #[test]
    fn test_datetime_and_media_inputs() {
        let record = RecordType::new("post")
            .with_field(Field::new("publishedAt", FieldType::Text).with_format("datetime"))
            .with_field(Field::new("cover", FieldType::MediaReference).with_media_type(MediaType::Image))
            .with_field(Field::new("clip", FieldType::MediaReference));
        let ts = render(&record);

        assert!(ts.contains("publishedAtInput.type = 'datetime-local';"));
        assert!(ts.contains("coverInput.placeholder = 'https://example.com/image';"));
        assert!(ts.contains("clipInput.placeholder = 'https://example.com/file';"));
    }

    #[test]
    fn test_save_creates_or_updates_then_refetches() {
        let record = RecordType::new("todo").with_field(Field::new("title", FieldType::Text));
        let ts = render(&record);

        assert!(ts.contains("import { createTodo, updateTodo, getTodos } from '../API';"));
        assert!(ts.contains("if (item) {\n        await updateTodo(item.uri, payload);\n      } else {\n        await createTodo(payload);\n      }"));
        assert!(ts.find("await createTodo(payload);").unwrap() < ts.find("await getTodos();").unwrap());
        assert!(ts.contains("storeManager.setTodos(response.todos);"));
    }

    #[test]
    fn test_colliding_locals_are_numbered() {
        let fields = vec![Field::new("due date", FieldType::Text), Field::new("dueDate", FieldType::Text)];
        assert_eq!(unique_locals(&fields), vec!["dueDate".to_string(), "dueDate1".to_string()]);
    }

    #[test]
    fn test_checkbox_locals_do_not_shadow_helpers() {
        let record = RecordType::new("item")
            .with_field(Field::new("add", FieldType::Boolean))
            .with_field(Field::new("split", FieldType::Boolean))
            .with_field(Field::new("title", FieldType::Text));
        let ts = render(&record);

        assert!(ts.contains("const addCheckLabel = document.createElement('label');"));
        assert!(ts.contains("const splitCheckLabel = document.createElement('label');"));
        assert!(!ts.contains("const addLabel "));
        assert!(ts.contains("addLabel(form, 'title');"));
    }
}
