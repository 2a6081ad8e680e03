use pretty_assertions::assert_eq;
use xperts_landing::carousel::Carousel;
use xperts_landing::content::TESTIMONIALS;

#[test]
fn next_cycles_through_every_testimonial() {
    let mut carousel = Carousel::new(TESTIMONIALS.len());
    let order: Vec<usize> = (0..TESTIMONIALS.len() + 1)
        .map(|_| {
            carousel.next();
            carousel.index()
        })
        .collect();
    assert_eq!(order, vec![1, 2, 3, 0, 1]);
}

#[test]
fn autoplay_pauses_on_hover_and_restarts_on_leave() {
    let mut carousel = Carousel::new(TESTIMONIALS.len());
    let first_timer = carousel.epoch();
    assert!(carousel.tick(first_timer));
    assert_eq!(carousel.index(), 1);

    carousel.set_hovered(true);
    let paused_at = carousel.index();
    assert!(!carousel.tick(first_timer));
    assert_eq!(carousel.index(), paused_at);

    carousel.set_hovered(false);
    let resumed_timer = carousel.epoch();
    assert!(!carousel.tick(first_timer));
    assert_eq!(carousel.index(), paused_at);

    assert!(carousel.tick(resumed_timer));
    assert!(carousel.tick(resumed_timer));
    assert_eq!(carousel.index(), (paused_at + 2) % TESTIMONIALS.len());
}
