pub mod service;

pub trait CheckoutService {
    fn checkout_book(&mut self, isbn: &str, patron_id: &str) -> bool;
    fn return_book(&mut self, isbn: &str, patron_id: &str) -> bool;
}
