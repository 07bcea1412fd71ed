//! Application entry module.

use super::paths::{import_path, APP_ENTRY, AUTH, NAVIGATION, SESSION_MANAGER, STORE, UI_COMPONENTS, UI_STATE};
use crate::naming::RecordNames;

/// Generates app.ts: OAuth callback detection, login/logout wiring and the
/// main menu for the primary record type.
pub fn generate_app_ts(primary: &RecordNames) -> String {
    format!(
        r#"import Store from '{store}';
import {{ NavigationManager }} from '{navigation}';
import {{ createButton }} from '{components}';
import {{
  showLoadingScreen,
  showLoginScreen,
  showAppScreen,
  showStatus,
}} from '{ui_state}';
import {{
  restoreSession,
  updateUserInfo,
  loadUserData,
}} from '{session}';
import {{
  initOAuthClient,
  signIn,
  signOut,
}} from '{auth}';

declare global {{
  interface Window {{
    app: {{ store: typeof Store }};
  }}
}}

window.app = {{ store: Store }};

let navigationManager: NavigationManager;

initOAuthClient();

window.addEventListener('DOMContentLoaded', async () => {{
  const queryParams = new URLSearchParams(window.location.search);
  const hashParams = new URLSearchParams(window.location.hash.slice(1));

  const isOAuthCallback =
    queryParams.has('code') ||
    queryParams.has('error') ||
    hashParams.has('code') ||
    hashParams.has('error');

  if (isOAuthCallback) {{
    showLoadingScreen();
  }}

  await initializeApp();

  document.getElementById('loginForm')!.addEventListener('submit', async (e: Event) => {{
    e.preventDefault();

    const handleInput = document.getElementById('handleInput') as HTMLInputElement;
    const handle = handleInput.value.trim();

    if (!handle) {{
      showStatus('loginStatus', 'Please enter your handle', true);
      return;
    }}

    try {{
      showStatus('loginStatus', 'Redirecting to sign in...');
      await signIn(handle);
    }} catch (error) {{
      const errorMsg = error instanceof Error ? error.message : 'Unknown error';
      showStatus('loginStatus', 'Login failed: ' + errorMsg, true);
    }}
  }});

  document.getElementById('logoutButton')!.addEventListener('click', async () => {{
    try {{
      await signOut();
      showLoginScreen();
      showStatus('loginStatus', 'Signed out successfully');
    }} catch (error) {{
      const errorMsg = error instanceof Error ? error.message : 'Unknown error';
      showStatus('appStatus', 'Logout failed: ' + errorMsg, true);
    }}
  }});
}});

async function initializeApp(): Promise<void> {{
  const result = await restoreSession();

  if (result) {{
    showAppScreen();
    updateUserInfo();
    await loadUserData();
    initializeMainMenu();

    if (result.state) {{
      console.log(result.session.sub + ' was successfully authenticated');
    }} else {{
      console.log(result.session.sub + ' was restored');
    }}
  }} else {{
    showLoginScreen();
  }}
}}

function initializeMainMenu(): void {{
  navigationManager = new NavigationManager();

  const menuContainer = document.getElementById('menuContainer');
  if (!menuContainer) return;

  menuContainer.innerHTML = '';

  const viewAllBtn = createButton('View All {pascal}s', 'primary', () => {{
    navigationManager.showList();
  }});

  const createNewBtn = createButton('Create New {pascal}', 'primary', () => {{
    navigationManager.showForm(null);
  }});

  menuContainer.appendChild(viewAllBtn);
  menuContainer.appendChild(createNewBtn);
}}
"#,
        store = import_path(APP_ENTRY, STORE),
        navigation = import_path(APP_ENTRY, NAVIGATION),
        components = import_path(APP_ENTRY, UI_COMPONENTS),
        ui_state = import_path(APP_ENTRY, UI_STATE),
        session = import_path(APP_ENTRY, SESSION_MANAGER),
        auth = import_path(APP_ENTRY, AUTH),
        pascal = primary.pascal,
    )
}
