use speculate2::speculate;

speculate! {
    use visitnote_core::{DisclosureList, Error};

    fn letters(n: usize) -> Vec<char> {
        ('a'..='z').take(n).collect()
    }

    describe "disclosure list" {
        describe "construction" {
            it "defaults to three visible items" {
                let list = DisclosureList::new(letters(5));
                assert_eq!(list.initial_count(), 3);
                assert!(!list.is_expanded());
            }

            it "rejects a zero threshold" {
                let result = DisclosureList::with_initial_count(letters(5), 0);
                assert!(matches!(result, Err(Error::InvalidConfiguration { value: 0, .. })));
            }

            it "accepts a threshold of one" {
                let list = DisclosureList::with_initial_count(letters(2), 1).unwrap();
                assert_eq!(list.visible_items(), &['a']);
            }
        }

        describe "short lists" {
            it "shows everything and offers no toggle" {
                for len in 0..=5 {
                    let list = DisclosureList::with_initial_count(letters(len), 5).unwrap();
                    assert_eq!(list.visible_items(), letters(len).as_slice());
                    assert!(!list.is_toggleable());
                    assert_eq!(list.remaining_count(), 0);
                    assert_eq!(list.toggle_label(), None);
                }
            }

            it "ignores toggle" {
                let list = DisclosureList::new(letters(3));
                let toggled = list.clone().toggled();
                assert_eq!(toggled, list);
                assert!(!toggled.is_expanded());
            }

            it "renders nothing when empty" {
                let list: DisclosureList<char> = DisclosureList::new(Vec::new());
                assert!(list.is_empty());
                assert!(list.visible_items().is_empty());
                assert!(!list.is_toggleable());
            }
        }

        describe "long lists" {
            it "shows the first items in original order while collapsed" {
                let list = DisclosureList::with_initial_count(vec![5, 1, 4, 2, 3], 2).unwrap();
                assert_eq!(list.visible_items(), &[5, 1]);
                assert_eq!(list.remaining_count(), 3);
            }

            it "shows everything once expanded" {
                let mut list = DisclosureList::with_initial_count(vec![5, 1, 4, 2, 3], 2).unwrap();
                list.toggle();
                assert!(list.is_expanded());
                assert_eq!(list.visible_items(), &[5, 1, 4, 2, 3]);
                assert_eq!(list.remaining_count(), 0);
            }

            it "returns to its original state after two toggles" {
                let list = DisclosureList::new(letters(7));
                assert_eq!(list.clone().toggled().toggled(), list);
            }

            it "labels the toggle with the hidden count" {
                let mut list = DisclosureList::with_initial_count(letters(8), 5).unwrap();
                assert_eq!(list.toggle_label().as_deref(), Some("Read More (3 more)"));
                list.toggle();
                assert_eq!(list.toggle_label().as_deref(), Some("Read Less"));
            }
        }
    }
}
