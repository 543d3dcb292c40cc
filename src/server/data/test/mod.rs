mod banner;
mod cart;
mod collection;
mod message;
mod order;
mod product;
