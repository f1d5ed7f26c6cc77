//! Global CSS styles for Vitrine.
//!
//! Warm editorial palette over a single scrolling page. The interactive
//! markers (.sticky, .active, .show, .error, .modal-open) are driven by
//! component state, never toggled from script.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --paper: #faf8f4;
  --paper-dim: #f1ede6;
  --ink: #22252a;
  --ink-soft: #4a4f57;

  /* ACCENT */
  --accent: #b5543b;
  --accent-glow: rgba(181, 84, 59, 0.25);

  /* SEMANTIC */
  --danger: #c0392b;
  --advisory: #e67e22;
  --muted: rgba(34, 37, 42, 0.5);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-sans);
  line-height: 1.6;
}

/* === Page container (the scroll surface) === */
.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

.page.modal-open {
  overflow: hidden;
}

/* === Header === */
.site-header {
  width: 100%;
  background: var(--paper);
  border-bottom: 1px solid var(--paper-dim);
  z-index: 100;
}

.site-header.sticky {
  position: fixed;
  top: 0;
  left: 0;
  box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
}

.header-inner {
  max-width: 1080px;
  margin: 0 auto;
  padding: 1.25rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.site-title {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  letter-spacing: 0.04em;
}

/* === Navigation === */
.site-nav {
  display: flex;
  gap: 1.75rem;
}

.nav-link {
  background: none;
  border: none;
  cursor: pointer;
  font: inherit;
  color: var(--ink-soft);
  padding: 0.25rem 0;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.nav-link:hover {
  color: var(--accent);
  border-color: var(--accent);
}

.menu-toggle {
  display: none;
  background: none;
  border: none;
  cursor: pointer;
  color: var(--ink);
  padding: 0.25rem;
}

@media (max-width: 768px) {
  .menu-toggle {
    display: block;
  }

  .site-nav {
    display: none;
  }

  .site-nav.active {
    display: flex;
    flex-direction: column;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    background: var(--paper);
    border-bottom: 1px solid var(--paper-dim);
    padding: 1rem 1.5rem;
    gap: 1rem;
  }

  .header-inner {
    position: relative;
  }
}

/* === Sections === */
.section {
  max-width: 1080px;
  margin: 0 auto;
  padding: 4.5rem 1.5rem;
}

.section-title {
  font-family: var(--font-serif);
  font-size: 2rem;
  margin-bottom: 1.5rem;
}

.hero {
  min-height: 60vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
}

.hero-tagline {
  font-size: 1.25rem;
  color: var(--ink-soft);
  max-width: 36rem;
}

/* === Portfolio === */
.portfolio-filters {
  display: flex;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.filter-btn {
  background: none;
  border: 1px solid var(--paper-dim);
  border-radius: 999px;
  padding: 0.35rem 1rem;
  cursor: pointer;
  font: inherit;
  color: var(--ink-soft);
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.filter-btn.active {
  border-color: var(--accent);
  color: var(--accent);
}

.portfolio-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.portfolio-item {
  background: var(--paper-dim);
  border-radius: 8px;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.portfolio-item h3 {
  font-family: var(--font-serif);
}

.portfolio-summary {
  color: var(--ink-soft);
  flex: 1;
}

.view-details-btn {
  align-self: flex-start;
  background: var(--accent);
  color: var(--paper);
  border: none;
  border-radius: 4px;
  padding: 0.5rem 1rem;
  cursor: pointer;
  font: inherit;
  transition: opacity var(--transition-fast);
}

.view-details-btn:hover {
  opacity: 0.85;
}

/* === Project modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(20, 20, 20, 0.55);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 200;
}

.project-modal {
  background: var(--paper);
  border-radius: 8px;
  max-width: 620px;
  width: calc(100% - 3rem);
  max-height: 80vh;
  overflow-y: auto;
  padding: 2rem;
  position: relative;
}

.close-modal-btn {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  background: none;
  border: none;
  cursor: pointer;
  color: var(--ink-soft);
  font-size: 1.25rem;
  line-height: 1;
}

.modal-title {
  font-family: var(--font-serif);
  margin-bottom: 1rem;
  padding-right: 2rem;
}

.modal-body {
  color: var(--ink-soft);
}

.modal-body em {
  color: var(--accent);
}

.modal-stack {
  display: flex;
  gap: 0.5rem;
  margin-top: 1.25rem;
  flex-wrap: wrap;
}

.stack-tag {
  background: var(--paper-dim);
  border-radius: 999px;
  padding: 0.2rem 0.75rem;
  font-size: 0.85rem;
}

.modal-link {
  display: inline-block;
  margin-top: 1rem;
  color: var(--accent);
}

/* === Testimonials === */
.testimonial-slider {
  position: relative;
  max-width: 640px;
  margin: 0 auto;
  text-align: center;
}

.testimonial-item {
  display: none;
}

.testimonial-item.active {
  display: block;
}

.testimonial-quote {
  font-family: var(--font-serif);
  font-size: 1.35rem;
  font-style: italic;
  margin-bottom: 1rem;
}

.testimonial-author {
  color: var(--ink-soft);
}

.testimonial-controls {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-top: 1.5rem;
}

.testimonial-nav {
  background: none;
  border: 1px solid var(--paper-dim);
  border-radius: 50%;
  width: 2.5rem;
  height: 2.5rem;
  cursor: pointer;
  color: var(--ink);
  transition: border-color var(--transition-fast);
}

.testimonial-nav:hover:not(:disabled) {
  border-color: var(--accent);
}

.testimonial-nav:disabled {
  opacity: 0.35;
  cursor: default;
}

/* === Contact form === */
.contact-form {
  max-width: 540px;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.form-field label {
  font-size: 0.9rem;
  color: var(--ink-soft);
}

.form-field input,
.form-field textarea {
  font: inherit;
  padding: 0.6rem 0.75rem;
  border: 1px solid var(--paper-dim);
  border-radius: 4px;
  background: #fff;
}

.form-field input.error,
.form-field textarea.error {
  border-color: var(--danger);
}

.field-error {
  color: var(--danger);
  font-size: 0.85rem;
  min-height: 1.1em;
}

.form-status {
  min-height: 1.4em;
}

.submit-btn {
  align-self: flex-start;
  background: var(--ink);
  color: var(--paper);
  border: none;
  border-radius: 4px;
  padding: 0.65rem 1.5rem;
  cursor: pointer;
  font: inherit;
}

/* === Scroll to top === */
.scroll-to-top {
  position: fixed;
  bottom: 1.5rem;
  right: 1.5rem;
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 50%;
  background: var(--accent);
  color: var(--paper);
  border: none;
  cursor: pointer;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
  z-index: 150;
}

.scroll-to-top.show {
  opacity: 1;
  pointer-events: auto;
}

/* === Footer === */
.site-footer {
  border-top: 1px solid var(--paper-dim);
  padding: 2rem 1.5rem;
  text-align: center;
  color: var(--muted);
}
"#;
