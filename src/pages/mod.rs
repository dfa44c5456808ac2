pub mod cartera;
pub mod resumen;
