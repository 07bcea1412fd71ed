//! View switching for the primary record type.

use crate::codegen::paths::{import_path, DETAIL_VIEW, FORM_VIEW, LIST_VIEW, NAVIGATION, STORE, TYPES};
use crate::naming::RecordNames;

/// Generates services/Navigation.ts.
pub fn generate_navigation_ts(primary: &RecordNames) -> String {
    let data = primary.data_type();
    let items = format!("Store.{}", primary.collection_key());

    format!(
        r#"/**
 * Navigation manager for handling view transitions
 */

import Store from '{store}';
import {{ {data} }} from '{types}';
import {{ renderListView }} from '{list_view}';
import {{ renderDetailView }} from '{detail_view}';
import {{ renderFormView }} from '{form_view}';

export class NavigationManager {{
  private activateView(viewId: string): void {{
    const views = ['mainMenuView', 'listView', 'detailView', 'formView'];
    views.forEach((id) => {{
      const el = document.getElementById(id);
      if (el) el.classList.remove('active');
    }});

    const targetView = document.getElementById(viewId);
    if (targetView) targetView.classList.add('active');
  }}

  showMainMenu(): void {{
    this.activateView('mainMenuView');
  }}

  showList(): void {{
    this.activateView('listView');

    const container = document.getElementById('listView');
    if (!container) return;

    renderListView(container, {items}, {{
      onItemClick: (uri) => {{
        const item = {items}.find((i) => i.uri === uri);
        if (item) this.showDetail(item);
      }},
      onBack: () => this.showMainMenu(),
      onCreate: () => this.showForm(null),
    }});
  }}

  showDetail(item: {data}): void {{
    this.activateView('detailView');

    const container = document.getElementById('detailView');
    if (!container) return;

    renderDetailView(container, item, {{
      onBack: () => this.showList(),
      onEdit: () => this.showForm(item),
      onDelete: () => this.showList(),
    }});
  }}

  showForm(item: {data} | null): void {{
    this.activateView('formView');

    const container = document.getElementById('formView');
    if (!container) return;

    renderFormView(container, item, {{
      onSave: () => this.showList(),
      onCancel: () => (item ? this.showDetail(item) : this.showList()),
    }});
  }}
}}
"#,
        store = import_path(NAVIGATION, STORE),
        types = import_path(NAVIGATION, TYPES),
        list_view = import_path(NAVIGATION, LIST_VIEW),
        detail_view = import_path(NAVIGATION, DETAIL_VIEW),
        form_view = import_path(NAVIGATION, FORM_VIEW),
        data = data,
        items = items,
    )
}
