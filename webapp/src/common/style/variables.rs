pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --primary: #0B5FA5;
  --primary-light: #3C8DD0;
  --primary-dark: #084679;
  --accent: #F28C28;

  /* Neutrals */
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-400: #9CA3AF;
  --neutral-600: #4B5563;
  --neutral-900: #111827;

  --background: #FFFFFF;
  --surface: #FFFFFF;
  --surface-alt: var(--neutral-100);
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;
  --error: #DC2626;

  /* Layout */
  --header-height: 70px;
  --container-width: 1200px;

  --space-2: 8px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-16: 64px;

  --radius-md: 6px;
  --radius-lg: 10px;

  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
  --overlay: rgba(0, 0, 0, 0.9);
}"#;
