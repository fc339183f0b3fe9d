pub mod result_card;
