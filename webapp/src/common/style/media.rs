// sliders, gallery grid, lightbox and the standalone image modal
pub const MEDIA_STYLES: &str = r#"
.product-slider {
  position: relative;
  overflow: hidden;
  border-radius: var(--radius-md);
}

.slide { display: none; }
.slide.active { display: block; }

.slide img {
  width: 100%;
  height: 240px;
  object-fit: cover;
  cursor: zoom-in;
}

.slider-prev, .slider-next {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  background: rgba(0, 0, 0, 0.4);
  color: var(--text-inverse);
  border: none;
  padding: var(--space-2);
  cursor: pointer;
}

.slider-prev { left: var(--space-2); }
.slider-next { right: var(--space-2); }

.slider-dots {
  position: absolute;
  bottom: var(--space-2);
  width: 100%;
  display: flex;
  justify-content: center;
  gap: 6px;
}

.slider-dot {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.5);
  cursor: pointer;
}

.slider-dot.active { background: var(--surface); }

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-4);
}

@media (max-width: 768px) {
  .gallery-grid { grid-template-columns: repeat(2, 1fr); }
}

.gallery-item {
  cursor: pointer;
  border-radius: var(--radius-md);
  overflow: hidden;
}

.gallery-item .thumbnail {
  position: relative;
  aspect-ratio: 1;
}

.gallery-item img, .gallery-item video {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.play-icon {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-inverse);
  font-size: 2rem;
}

.gallery-grid .loading, .gallery-grid .error {
  grid-column: 1 / -1;
  text-align: center;
  padding: 2rem;
}

.gallery-grid .error { color: var(--error); }

.load-more-container {
  text-align: center;
  margin-top: var(--space-6);
}

.lightbox {
  position: fixed;
  inset: 0;
  background: var(--overlay);
  z-index: 1000;
  align-items: center;
  justify-content: center;
}

.lightbox-content {
  position: relative;
  max-width: 90%;
  max-height: 90%;
}

.lightbox-media-container img, .lightbox-media-container video {
  max-width: 100%;
  max-height: 80vh;
}

.lightbox-caption, .modal-caption {
  color: var(--text-inverse);
  text-align: center;
  padding: var(--space-2);
}

.close-lightbox, .close-modal {
  position: absolute;
  top: -40px;
  right: 0;
  color: var(--text-inverse);
  font-size: 2rem;
  cursor: pointer;
}

.modal {
  position: fixed;
  inset: 0;
  background: var(--overlay);
  z-index: 1000;
}

.modal-content {
  display: flex;
  justify-content: center;
  align-items: center;
  height: 85vh;
}

.modal-content img {
  max-width: 90%;
  max-height: 100%;
}

.close-modal {
  top: var(--space-4);
  right: var(--space-6);
}

.modal-nav {
  position: absolute;
  top: 50%;
  background: none;
  border: none;
  color: var(--text-inverse);
  font-size: 2rem;
  cursor: pointer;
}

.modal-prev { left: var(--space-4); }
.modal-next { right: var(--space-4); }
"#;
