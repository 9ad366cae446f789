//! Global CSS styles for the essentials page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg-deep: #2c1f3d;
  --bg-card: #3d2b52;
  --accent: #e07a5f;
  --accent-soft: rgba(224, 122, 95, 0.25);
  --title: #f2cc8f;

  --text-primary: #f5f1f8;
  --text-secondary: rgba(245, 241, 248, 0.7);

  --font-sans: 'Roboto Condensed', 'Helvetica Neue', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --radius: 6px;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: radial-gradient(circle at top, #4b2f6b 0%, var(--bg-deep) 60%);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Header === */
header {
  text-align: center;
  padding: 3rem 1rem 2rem;
}

header h1 {
  font-size: 3rem;
  color: var(--title);
  letter-spacing: 0.05em;
}

header p {
  color: var(--text-secondary);
  font-size: 1.25rem;
}

/* === Sections === */
main {
  width: min(90%, 60rem);
  margin: 0 auto 3rem;
}

section {
  margin-top: 2.5rem;
}

section h2 {
  color: var(--title);
  font-size: 1.75rem;
  margin-bottom: 1rem;
}

/* === Concept Cards === */
#core-concepts ul {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
  gap: 1.5rem;
}

.concept-card {
  background: var(--bg-card);
  border-radius: var(--radius);
  padding: 1.5rem;
  text-align: center;
}

.concept-icon {
  display: block;
  font-size: 2.5rem;
  color: var(--accent);
  margin-bottom: 0.5rem;
}

.concept-card h3 {
  margin-bottom: 0.5rem;
}

.concept-card p {
  color: var(--text-secondary);
  font-size: 0.95rem;
}

/* === Example Tabs === */
#examples menu {
  display: flex;
  gap: 0.5rem;
  list-style: none;
  margin-bottom: 1rem;
}

#examples menu button {
  font: inherit;
  color: var(--text-secondary);
  background: transparent;
  border: none;
  border-radius: var(--radius);
  padding: 0.5rem 1rem;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

#examples menu button:hover {
  background: var(--accent-soft);
  color: var(--text-primary);
}

#examples menu button.active {
  background: var(--accent);
  color: var(--bg-deep);
}

#tab-content {
  background: var(--bg-card);
  border-radius: var(--radius);
  padding: 1.5rem;
}

#tab-content pre {
  margin-top: 1rem;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.35);
  border-radius: var(--radius);
  overflow-x: auto;
  font-family: var(--font-mono);
  font-size: 0.9rem;
}
"#;
