//! Global stylesheet for the portfolio window.
//!
//! The page root carries `.theme-dark`/`.theme-light` and
//! `.motion-full`/`.motion-reduced`; everything theme-dependent reads the
//! custom properties those classes set.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Accent run, indigo through pink */
  --indigo: #6366f1;
  --indigo-deep: #4f46e5;
  --purple: #a855f7;
  --pink: #ec4899;
  --accent-gradient: linear-gradient(90deg, #6366f1, #a855f7, #ec4899);

  /* Availability badge */
  --green: #4ade80;
  --green-halo: rgba(34, 197, 94, 0.4);

  --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;

  --focus-ring: #818cf8;
}

.theme-dark {
  --page-bg: linear-gradient(180deg, #030712 0%, #000000 100%);
  --text-primary: #f3f4f6;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;
  --surface: #1f2937;
  --border: #374151;
  --nav-bg: rgba(17, 24, 39, 0.9);
  --tint-soft: rgba(17, 24, 39, 0.5);
  --tint-solid: #111827;
}

.theme-light {
  --page-bg: linear-gradient(180deg, #f9fafb 0%, #f3f4f6 100%);
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;
  --surface: #ffffff;
  --border: #e5e7eb;
  --nav-bg: rgba(255, 255, 255, 0.9);
  --tint-soft: rgba(255, 255, 255, 0.5);
  --tint-solid: #f9fafb;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  min-height: 100vh;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Page Shell === */
.page {
  min-height: 100vh;
  background: var(--page-bg);
  color: var(--text-primary);
  overflow-x: hidden;
  position: relative;
}

.page-main {
  position: relative;
  z-index: 1;
}

.page-footer {
  position: relative;
  z-index: 1;
  padding: 2.5rem 1.5rem;
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
  background: var(--nav-bg);
  backdrop-filter: blur(12px);
}

.skip-link {
  position: fixed;
  top: 1rem;
  left: 1rem;
  z-index: 70;
  padding: 0.75rem 1.5rem;
  background: var(--indigo-deep);
  color: #ffffff;
  border-radius: 0.5rem;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  transform: translateY(-400%);
}

.skip-link:focus {
  transform: none;
}

/* === Night Sky === */
.night-sky {
  position: fixed;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
  z-index: 0;
}

.star {
  position: absolute;
  border-radius: 50%;
}

.theme-dark .star {
  background: #ffffff;
  box-shadow: 0 0 4px rgba(255, 255, 255, 0.8);
}

.theme-light .star {
  background: #fef08a;
  box-shadow: 0 0 3px rgba(255, 200, 0, 0.6);
}

@keyframes twinkle {
  0%, 100% { opacity: 0.3; transform: scale(1); }
  50% { opacity: 1; transform: scale(1.3); }
}

.shooting-star {
  position: absolute;
  width: 4px;
  height: 96px;
  background: linear-gradient(180deg, #ffffff, #67e8f9, transparent);
  transform-origin: top left;
  opacity: 0;
  animation: shoot 1.5s ease-in forwards;
}

@keyframes shoot {
  0% { transform: translate(0, 0) rotate(45deg); opacity: 0; }
  50% { opacity: 1; }
  100% { transform: translate(300px, 300px) rotate(45deg); opacity: 0; }
}

/* === Sky Orbs === */
.sky-orb {
  position: absolute;
  border-radius: 50%;
}

.dark-orb-1 {
  top: 5rem;
  right: 5rem;
  width: 10rem;
  height: 10rem;
  background: linear-gradient(135deg, #4f46e5, #9333ea, #db2777);
  opacity: 0.2;
  filter: blur(64px);
  animation: orb-drift-a 10s ease-in-out infinite;
}

.dark-orb-2 {
  bottom: 10rem;
  left: 5rem;
  width: 14rem;
  height: 14rem;
  background: linear-gradient(135deg, #3b82f6, #06b6d4, #14b8a6);
  opacity: 0.15;
  filter: blur(64px);
  animation: orb-drift-b 12s ease-in-out infinite;
}

.dark-orb-3 {
  top: 50%;
  left: 33%;
  width: 8rem;
  height: 8rem;
  background: linear-gradient(135deg, #9333ea, #db2777);
  opacity: 0.2;
  filter: blur(40px);
  animation: orb-orbit 20s linear infinite;
}

.dark-orb-4 {
  bottom: 5rem;
  right: 25%;
  width: 12rem;
  height: 12rem;
  background: linear-gradient(135deg, #7c3aed, #c026d3);
  opacity: 0.15;
  filter: blur(64px);
  animation: orb-spin 25s linear infinite;
}

.light-orb-1 {
  top: 8rem;
  right: 10rem;
  width: 16rem;
  height: 16rem;
  background: linear-gradient(135deg, #fde047, #fb923c, #f87171);
  opacity: 0.3;
  filter: blur(64px);
  animation: sun-glow 5s ease-in-out infinite;
}

.light-orb-2 {
  top: 2.5rem;
  left: 25%;
  width: 7rem;
  height: 7rem;
  background: linear-gradient(135deg, #fdba74, #fb7185);
  opacity: 0.25;
  filter: blur(40px);
  animation: orb-drift-c 7s ease-in-out infinite;
}

.light-orb-3 {
  bottom: 10rem;
  right: 33%;
  width: 10rem;
  height: 10rem;
  background: linear-gradient(135deg, #f9a8d4, #fb7185, #f87171);
  opacity: 0.2;
  filter: blur(64px);
  animation: orb-orbit-b 15s linear infinite;
}

.light-orb-4 {
  top: 50%;
  right: 5rem;
  width: 8rem;
  height: 8rem;
  background: linear-gradient(135deg, #fcd34d, #facc15);
  opacity: 0.25;
  filter: blur(40px);
  animation: orb-sway 9s ease-in-out infinite;
}

@keyframes orb-drift-a {
  0%, 100% { transform: translate(0, 0) scale(1); }
  50% { transform: translate(30px, -40px) scale(1.2); }
}

@keyframes orb-drift-b {
  0%, 100% { transform: translate(0, 0) scale(1); }
  50% { transform: translate(-40px, 50px) scale(1.3); }
}

@keyframes orb-orbit {
  0% { transform: translate(0, 0) rotate(0deg); }
  50% { transform: translate(20px, -30px) rotate(180deg); }
  100% { transform: translate(0, 0) rotate(360deg); }
}

@keyframes orb-spin {
  0% { transform: scale(1) rotate(0deg); }
  50% { transform: scale(1.4) rotate(-180deg); }
  100% { transform: scale(1) rotate(-360deg); }
}

@keyframes sun-glow {
  0%, 100% { transform: scale(1); opacity: 0.3; }
  50% { transform: scale(1.15); opacity: 0.4; }
}

@keyframes orb-drift-c {
  0%, 100% { transform: translate(0, 0) scale(1); }
  50% { transform: translate(15px, -20px) scale(1.1); }
}

@keyframes orb-orbit-b {
  0% { transform: translate(0, 0) scale(1) rotate(0deg); }
  50% { transform: translate(0, 30px) scale(1.2) rotate(180deg); }
  100% { transform: translate(0, 0) scale(1) rotate(360deg); }
}

@keyframes orb-sway {
  0%, 100% { transform: translate(0, 0); }
  50% { transform: translate(-25px, 20px); }
}

/* === Cursor Trail === */
.cursor-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 60;
}

.cursor-dot,
.cursor-ring {
  position: fixed;
  top: 0;
  left: 0;
  mix-blend-mode: difference;
  will-change: transform;
}

.cursor-dot-pulse {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  animation: cursor-pulse 2s ease-in-out infinite;
}

.theme-dark .cursor-dot-pulse { background: #22d3ee; }
.theme-light .cursor-dot-pulse { background: #fbbf24; }

.cursor-ring {
  width: 32px;
  height: 32px;
  border-radius: 50%;
  border: 2px solid;
}

.theme-dark .cursor-ring { border-color: #c084fc; }
.theme-light .cursor-ring { border-color: #fb923c; }

@keyframes cursor-pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.2); }
}

/* === Scroll Progress === */
.scroll-progress {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: 4px;
  background: var(--accent-gradient);
  transform-origin: left;
  z-index: 50;
}

/* === Navigation === */
.nav-bar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  background: transparent;
  transition: background 0.3s ease, box-shadow 0.3s ease;
}

.nav-bar.scrolled {
  background: var(--nav-bg);
  backdrop-filter: blur(12px);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.nav-inner {
  max-width: 80rem;
  margin: 0 auto;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 1.5rem;
}

.nav-brand {
  font-size: 1.875rem;
  font-weight: 900;
  background: var(--accent-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  border-radius: 0.5rem;
}

.nav-links {
  display: flex;
  gap: 0.25rem;
}

.nav-link {
  font-size: 0.875rem;
  font-weight: 500;
  padding: 0.5rem 0.75rem;
  border-radius: 0.25rem;
  transition: color 0.2s ease;
}

.nav-link:hover,
.nav-link:focus {
  color: var(--indigo);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.theme-toggle {
  display: inline-flex;
  padding: 0.75rem;
  border-radius: 50%;
  background: var(--surface);
  border: 1px solid var(--border);
}

.theme-toggle svg {
  transition: transform 0.3s ease;
}

.theme-toggle:hover svg {
  transform: rotate(180deg);
}

.menu-toggle {
  display: none;
  padding: 0.5rem;
  border-radius: 0.25rem;
}

/* === Mobile Menu === */
.mobile-menu {
  position: fixed;
  top: 4.75rem;
  left: 0;
  right: 0;
  z-index: 39;
  background: var(--nav-bg);
  backdrop-filter: blur(12px);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  padding: 0.5rem 0 1rem;
  animation: menu-drop 0.3s ease-out;
}

.mobile-menu-item {
  display: block;
  width: 100%;
  text-align: left;
  font-size: 1.25rem;
  font-weight: 500;
  padding: 0.75rem 1.5rem;
  animation: menu-item-in 0.4s ease-out backwards;
  animation-delay: calc(var(--item-index) * 0.1s);
}

.mobile-menu-item:hover,
.mobile-menu-item:focus {
  color: var(--indigo);
}

@keyframes menu-drop {
  from { opacity: 0; transform: translateY(-8px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes menu-item-in {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: translateX(0); }
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  position: relative;
  overflow: hidden;
  padding: 5rem 1.5rem 0;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
}

.hero-orb {
  position: absolute;
  border-radius: 50%;
  filter: blur(64px);
}

.hero-orb-a {
  top: 25%;
  left: 50%;
  margin-left: -12rem;
  width: 24rem;
  height: 24rem;
  animation: hero-breathe-a 5s ease-in-out infinite;
}

.theme-dark .hero-orb-a { background: rgba(99, 102, 241, 0.1); }
.theme-light .hero-orb-a { background: rgba(250, 204, 21, 0.2); }

.hero-orb-b {
  bottom: 25%;
  right: 25%;
  width: 20rem;
  height: 20rem;
  animation: hero-breathe-b 6s ease-in-out 1s infinite;
}

.theme-dark .hero-orb-b { background: rgba(168, 85, 247, 0.1); }
.theme-light .hero-orb-b { background: rgba(251, 146, 60, 0.2); }

@keyframes hero-breathe-a {
  0%, 100% { transform: scale(1); opacity: 0.3; }
  50% { transform: scale(1.3); opacity: 0.6; }
}

@keyframes hero-breathe-b {
  0%, 100% { transform: scale(1); opacity: 0.2; }
  50% { transform: scale(1.4); opacity: 0.5; }
}

.hero-content {
  position: relative;
  z-index: 1;
  text-align: center;
  max-width: 64rem;
  margin: 0 auto;
}

.hero-badge {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  background: rgba(34, 197, 94, 0.2);
  color: var(--green);
  border: 1px solid rgba(34, 197, 94, 0.3);
  border-radius: 9999px;
  font-size: 0.875rem;
  font-weight: 600;
  margin-bottom: 2rem;
  backdrop-filter: blur(4px);
  animation: badge-glow 2s ease-in-out infinite;
}

@keyframes badge-glow {
  0%, 100% { box-shadow: 0 0 20px var(--green-halo); }
  50% { box-shadow: 0 0 40px rgba(34, 197, 94, 0.6); }
}

.hero-name {
  font-size: clamp(3rem, 8vw, 6rem);
  font-weight: 900;
  line-height: 1.1;
  margin-bottom: 1.5rem;
}

.hero-name-accent {
  display: inline-block;
  background: linear-gradient(90deg, #6366f1, #a855f7, #ec4899, #6366f1);
  background-size: 200% auto;
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  animation: gradient-pan 3s linear infinite;
}

@keyframes gradient-pan {
  to { background-position: 200% center; }
}

.hero-role-well {
  height: 6rem;
  margin-bottom: 2.5rem;
  perspective: 600px;
}

.hero-role {
  font-size: clamp(1.25rem, 3vw, 2.25rem);
  font-weight: 500;
  color: var(--text-secondary);
  animation: role-in 0.6s ease-out;
}

@keyframes role-in {
  from { opacity: 0; transform: rotateX(90deg) translateY(40px); }
  to { opacity: 1; transform: rotateX(0deg) translateY(0); }
}

.hero-ctas {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
}

.btn-primary,
.btn-secondary {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  padding: 1.25rem 2.5rem;
  border-radius: 9999px;
  font-weight: 700;
  font-size: 1.125rem;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.btn-primary {
  background: var(--accent-gradient);
  color: #ffffff;
}

.btn-primary:hover {
  transform: translateY(-5px) scale(1.05);
  box-shadow: 0 20px 50px rgba(99, 102, 241, 0.5);
}

.btn-secondary {
  background: var(--surface);
  border: 1px solid var(--border);
  backdrop-filter: blur(4px);
}

.btn-secondary:hover {
  transform: translateY(-5px) scale(1.05);
  box-shadow: 0 20px 50px rgba(0, 0, 0, 0.15);
}

.nudge-x {
  display: inline-flex;
  animation: nudge-x 1.5s ease-in-out infinite;
}

@keyframes nudge-x {
  0%, 100% { transform: translateX(0); }
  50% { transform: translateX(5px); }
}

.hero-scroll-cue {
  margin-top: 5rem;
  padding: 1rem;
  border-radius: 9999px;
  color: var(--text-muted);
  animation: cue-bounce 2s ease-in-out infinite;
}

@keyframes cue-bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(15px); }
}

/* === Section Reveal === */
.reveal {
  padding: 6rem 1.5rem;
  position: relative;
  opacity: 0;
  transform: translateY(50px);
  transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}

.reveal.revealed {
  opacity: 1;
  transform: translateY(0);
}

/* Per-section background tints */
.section-about {
  background: var(--tint-soft);
  backdrop-filter: blur(4px);
}

.section-experience,
.section-achievements {
  background: var(--tint-solid);
}

/* === Section Layout === */
.section-inner {
  max-width: 72rem;
  margin: 0 auto;
}

.section-inner.narrow {
  max-width: 60rem;
}

.centered {
  text-align: center;
}

.section-heading {
  text-align: center;
  margin-bottom: 5rem;
}

.section-title {
  font-size: clamp(2.25rem, 5vw, 3.5rem);
  font-weight: 700;
  margin-bottom: 3.5rem;
}

.section-heading .section-title {
  margin-bottom: 1.5rem;
}

.accent {
  color: var(--indigo);
}

.accent-gradient {
  background: linear-gradient(90deg, #6366f1, #a855f7);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.section-lede {
  font-size: 1.125rem;
  line-height: 1.8;
  color: var(--text-secondary);
  max-width: 48rem;
  margin: 0 auto;
}

/* === Stat Cards === */
.stat-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
}

.stat-card {
  padding: 1.5rem;
  border-radius: 1rem;
  background: var(--surface);
  border: 1px solid var(--border);
  text-align: center;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
  transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.stat-card:hover {
  transform: scale(1.08);
  box-shadow: 0 20px 40px rgba(99, 102, 241, 0.25);
}

.revealed .stat-card {
  animation: card-in 0.7s ease-out backwards;
  animation-delay: calc(var(--item-index) * 0.15s);
}

.stat-icon {
  display: inline-block;
  color: var(--indigo);
  margin-bottom: 1rem;
}

.stat-value {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: 0.25rem;
}

.stat-label {
  color: var(--text-muted);
}

@keyframes card-in {
  from { opacity: 0; transform: translateY(60px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Skill Cards === */
.skill-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2.5rem;
}

.skill-card {
  padding: 2.5rem;
  border-radius: 1.5rem;
  background: linear-gradient(135deg, rgba(99, 102, 241, 0.1), rgba(168, 85, 247, 0.1));
  border: 1px solid rgba(165, 180, 252, 0.3);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
  transition: transform 0.2s ease;
}

.skill-card:hover {
  transform: scale(1.08);
}

.revealed .skill-card {
  animation: card-in 0.7s ease-out backwards;
  animation-delay: calc(var(--item-index) * 0.2s);
}

.skill-icon {
  display: inline-block;
  color: var(--indigo);
  margin-bottom: 1.5rem;
}

.skill-card h3 {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 0.75rem;
}

.skill-card p {
  color: var(--text-muted);
}

/* === Experience === */
.role-stack {
  display: grid;
  gap: 2.5rem;
}

.role-card {
  padding: 2rem;
  border-radius: 1rem;
  background: var(--surface);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
  transition: transform 0.2s ease;
}

.role-card:hover {
  transform: scale(1.03);
}

.role-card h3 {
  font-size: 1.5rem;
  font-weight: 700;
}

.role-company {
  color: var(--indigo);
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.role-summary {
  color: var(--text-muted);
}

/* === Project Cards === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2.5rem;
}

.project-card {
  display: block;
  padding: 2rem;
  border-radius: 1.5rem;
  background: linear-gradient(135deg, #4f46e5, #9333ea);
  color: #ffffff;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  transition: transform 0.2s ease;
}

.project-card:hover {
  transform: translateY(-12px) scale(1.05);
}

.project-card h3 {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 0.75rem;
}

.project-card p {
  opacity: 0.9;
}

.project-link {
  display: inline-block;
  margin-top: 1.5rem;
  font-size: 0.875rem;
  font-weight: 600;
  text-decoration: underline;
  opacity: 0.9;
}

/* === Achievements === */
.achievement-icon {
  display: flex;
  justify-content: center;
  color: var(--indigo);
  margin-bottom: 1.5rem;
}

.achievement-entry {
  color: var(--text-muted);
  max-width: 48rem;
  margin: 0 auto 1rem;
}

/* === Contact === */
.contact-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 2rem;
  margin-top: 3rem;
}

.contact-pill {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 2rem;
  border-radius: 9999px;
  color: #ffffff;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
  transition: transform 0.2s ease;
}

.contact-pill:hover {
  transform: translateY(-3px);
}

.pill-mail { background: var(--indigo); }
.pill-linkedin { background: #2563eb; }
.pill-call { background: #16a34a; }

/* === Accessibility === */
*:focus-visible {
  outline: 2px solid var(--focus-ring);
  outline-offset: 2px;
}

.motion-reduced *,
.motion-reduced *::before,
.motion-reduced *::after {
  animation-duration: 0.01ms !important;
  animation-iteration-count: 1 !important;
  transition-duration: 0.01ms !important;
}

.motion-reduced .reveal {
  opacity: 1;
  transform: none;
}

.motion-reduced .cursor-layer {
  display: none;
}

@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}

/* === Responsive Layout === */
@media (min-width: 769px) {
  .mobile-menu {
    display: none;
  }
}

@media (min-width: 640px) {
  .hero-ctas {
    flex-direction: row;
  }
}

@media (min-width: 1024px) {
  .stat-grid {
    grid-template-columns: repeat(4, 1fr);
  }
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .menu-toggle {
    display: inline-flex;
  }

  .cursor-layer {
    display: none;
  }

  .skill-grid,
  .project-grid {
    grid-template-columns: 1fr;
  }

  .hero-role-well {
    height: 4.5rem;
  }
}
"#;
