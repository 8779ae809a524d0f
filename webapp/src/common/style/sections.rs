// header, hero, product cards, tabs, testimonials, contact, footer
pub const SECTION_STYLES: &str = r#"
header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  background: var(--surface);
  z-index: 100;
  transition: box-shadow 0.3s ease;
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 100%;
}

.logo {
  font-weight: 700;
  font-size: 1.4rem;
  color: var(--primary);
}

.nav-links {
  display: flex;
  gap: var(--space-6);
  list-style: none;
}

.nav-links a {
  color: var(--text-primary);
  font-weight: 500;
}

.menu-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  cursor: pointer;
}

.menu-toggle .bar {
  width: 25px;
  height: 3px;
  background: var(--text-primary);
  transition: transform 0.3s ease, opacity 0.3s ease;
}

.menu-toggle.active .bar:nth-child(1) { transform: translateY(8px) rotate(45deg); }
.menu-toggle.active .bar:nth-child(2) { opacity: 0; }
.menu-toggle.active .bar:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }

@media (max-width: 768px) {
  .menu-toggle { display: flex; }

  .nav-links {
    position: fixed;
    top: var(--header-height);
    left: -100%;
    width: 100%;
    flex-direction: column;
    background: var(--surface);
    padding: var(--space-6);
    transition: left 0.3s ease;
  }

  .nav-links.active { left: 0; }
}

section {
  padding: var(--space-16) 0;
}

.hero {
  padding-top: calc(var(--header-height) + var(--space-16));
  background: linear-gradient(135deg, var(--primary-dark), var(--primary));
  color: var(--text-inverse);
  text-align: center;
}

.btn {
  display: inline-block;
  padding: var(--space-2) var(--space-6);
  border-radius: var(--radius-md);
  background: var(--accent);
  color: var(--text-inverse);
  border: none;
  cursor: pointer;
}

.section-title {
  text-align: center;
  margin-bottom: var(--space-8);
}

.product-grid, .advantage-grid, .testimonial-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: var(--space-6);
}

.product-card, .advantage-card, .testimonial {
  background: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
  padding: var(--space-4);
}

.tab-buttons {
  display: flex;
  justify-content: center;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

.tab-btn {
  padding: var(--space-2) var(--space-4);
  border: 1px solid var(--primary);
  border-radius: var(--radius-md);
  background: var(--surface);
  color: var(--primary);
  cursor: pointer;
}

.tab-btn.active {
  background: var(--primary);
  color: var(--text-inverse);
}

.tab-content { display: none; }
.tab-content.active { display: block; }

.reveal {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.revealed {
  opacity: 1;
  transform: translateY(0);
}

footer {
  background: var(--neutral-900);
  color: var(--text-inverse);
  text-align: center;
  padding: var(--space-6) 0;
}
"#;
