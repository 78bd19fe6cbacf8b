//! Agregação do dashboard: janelas de tempo, cálculo das estatísticas e
//! montagem do JSON que a tela consome. Nada aqui faz I/O.

pub mod aggregator;
pub mod presenter;
pub mod window;
