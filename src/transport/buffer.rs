use bytes::{Bytes, BytesMut};

/// Pool of scratch write buffers, owned by the transport.
///
/// The broadcaster acquires two buffers per replica pass (owner sink,
/// observer sink) and returns both before moving to the next replica; a
/// buffer is never shared across replicas or ticks.
pub trait BufferPool {
    fn acquire(&self) -> BytesMut;
    fn release(&self, buffer: BytesMut);
}

/// Scoped handle to a pooled scratch buffer.
///
/// Returns the buffer to the pool on drop, on every exit path - including
/// unwinding out of a serialization or routing panic.
pub struct PooledWriter<'p> {
    pool: &'p dyn BufferPool,
    buffer: Option<BytesMut>,
}

impl<'p> PooledWriter<'p> {
    pub fn new(pool: &'p dyn BufferPool) -> Self {
        Self {
            pool,
            buffer: Some(pool.acquire()),
        }
    }

    /// Splits the written bytes off as a message payload. The emptied buffer
    /// keeps its remaining capacity and still goes back to the pool on drop.
    pub fn take_payload(&mut self) -> Bytes {
        let Some(buffer) = self.buffer.as_mut() else {
            panic!("PooledWriter: buffer already released");
        };
        buffer.split().freeze()
    }
}

impl std::ops::Deref for PooledWriter<'_> {
    type Target = BytesMut;

    fn deref(&self) -> &BytesMut {
        let Some(buffer) = self.buffer.as_ref() else {
            panic!("PooledWriter: buffer already released");
        };
        buffer
    }
}

impl std::ops::DerefMut for PooledWriter<'_> {
    fn deref_mut(&mut self) -> &mut BytesMut {
        let Some(buffer) = self.buffer.as_mut() else {
            panic!("PooledWriter: buffer already released");
        };
        buffer
    }
}

impl Drop for PooledWriter<'_> {
    fn drop(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.pool.release(buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    #[derive(Default)]
    struct CountingPool {
        acquired: Cell<usize>,
        released: Cell<usize>,
    }

    impl BufferPool for CountingPool {
        fn acquire(&self) -> BytesMut {
            self.acquired.set(self.acquired.get() + 1);
            BytesMut::with_capacity(64)
        }

        fn release(&self, _buffer: BytesMut) {
            self.released.set(self.released.get() + 1);
        }
    }

    #[test]
    fn releases_on_drop() {
        let pool = CountingPool::default();
        {
            let mut writer = PooledWriter::new(&pool);
            writer.extend_from_slice(b"abc");
            assert_eq!(pool.acquired.get(), 1);
            assert_eq!(pool.released.get(), 0);
        }
        assert_eq!(pool.released.get(), 1);
    }

    #[test]
    fn take_payload_leaves_buffer_for_the_pool() {
        let pool = CountingPool::default();
        {
            let mut writer = PooledWriter::new(&pool);
            writer.extend_from_slice(b"payload");
            let payload = writer.take_payload();
            assert_eq!(&payload[..], b"payload");
            assert!(writer.is_empty());
        }
        assert_eq!(pool.released.get(), 1);
    }

    #[test]
    fn releases_while_unwinding() {
        let pool = CountingPool::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut writer = PooledWriter::new(&pool);
            writer.extend_from_slice(b"x");
            panic!("serialization failed");
        }));
        assert!(result.is_err());
        assert_eq!(pool.acquired.get(), 1);
        assert_eq!(pool.released.get(), 1);
    }
}
